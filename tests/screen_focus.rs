//! End-to-end focus and membership scenarios through the public API.

use std::time::Duration;

use spark_widgets::{
    Button, CheckBox, ControlId, ControlKind, Error, InputEvent, KeyboardEvent, MouseButton,
    MouseButtons, MouseEvent, PointerState, Rect, Rgba, ScreenId, SliderV, Surface, Size, TextBox,
    Ui,
};

fn setup() -> (Ui, ScreenId) {
    let mut ui = Ui::default();
    let main = ui.create_screen("main").unwrap();
    ui.set_current(main).unwrap();
    (ui, main)
}

fn attach(ui: &mut Ui, screen: ScreenId, rect: Rect, name: &str, kind: impl Into<ControlKind>) -> ControlId {
    let id = ui.create_control(rect, name, kind).unwrap();
    ui.set_screen(id, screen).unwrap();
    id
}

fn ok_cancel(ui: &mut Ui, screen: ScreenId) -> (ControlId, ControlId) {
    let ok = attach(ui, screen, Rect::new(0, 0, 100, 30), "ok", Button::new("OK"));
    let cancel = attach(ui, screen, Rect::new(0, 40, 100, 30), "cancel", Button::new("Cancel"));
    (ok, cancel)
}

#[test]
fn test_conflicting_focus_order_is_reassigned_and_traversal_wraps() {
    let (mut ui, main) = setup();
    let (ok, cancel) = ok_cancel(&mut ui, main);

    assert_eq!(ui.control(ok).unwrap().focus_order(), 0);
    assert_eq!(ui.control(cancel).unwrap().focus_order(), 1);

    assert_eq!(ui.focus_next(main), Some(ok));
    assert_eq!(ui.focus_next(main), Some(cancel));
    assert_eq!(ui.focus_next(main), Some(ok));
}

#[test]
fn test_reassignment_takes_smallest_unused_order() {
    let (mut ui, main) = setup();
    let a = ui.create_control(Rect::new(0, 0, 10, 10), "a", Button::new("a")).unwrap();
    ui.set_focus_order(a, 2).unwrap();
    ui.set_screen(a, main).unwrap();

    let b = attach(&mut ui, main, Rect::new(0, 20, 10, 10), "b", Button::new("b"));
    assert_eq!(ui.control(b).unwrap().focus_order(), 0);

    let c = ui.create_control(Rect::new(0, 40, 10, 10), "c", Button::new("c")).unwrap();
    ui.set_focus_order(c, 2).unwrap();
    ui.set_screen(c, main).unwrap();
    assert_eq!(ui.control(c).unwrap().focus_order(), 1);
}

#[test]
fn test_prev_from_nothing_starts_at_highest_order() {
    let (mut ui, main) = setup();
    let (_, cancel) = ok_cancel(&mut ui, main);
    assert_eq!(ui.focus_prev(main), Some(cancel));
}

#[test]
fn test_next_then_prev_returns_to_start() {
    let (mut ui, main) = setup();
    let (ok, cancel) = ok_cancel(&mut ui, main);
    let help = attach(&mut ui, main, Rect::new(0, 80, 100, 30), "help", Button::new("?"));

    for start in [ok, cancel, help] {
        assert!(ui.set_focus(main, Some(start)));
        ui.focus_next(main);
        assert_eq!(ui.focus_prev(main), Some(start));
    }
}

#[test]
fn test_traversal_skips_disabled_and_unfocusable() {
    let (mut ui, main) = setup();
    let (ok, cancel) = ok_cancel(&mut ui, main);
    let help = attach(&mut ui, main, Rect::new(0, 80, 100, 30), "help", Button::new("?"));
    ui.control_mut(cancel).unwrap().enable = false;

    assert_eq!(ui.focus_next(main), Some(ok));
    assert_eq!(ui.focus_next(main), Some(help));
    assert_eq!(ui.focus_next(main), Some(ok));
}

#[test]
fn test_text_cursor_holds_focus_until_edge() {
    let (mut ui, main) = setup();
    let field = attach(&mut ui, main, Rect::new(0, 0, 100, 20), "field", TextBox::new("ab"));
    let ok = attach(&mut ui, main, Rect::new(0, 30, 100, 30), "ok", Button::new("OK"));

    if let ControlKind::TextBox(tb) = ui.control_mut(field).unwrap().kind_mut() {
        tb.cursor_traversal = true;
        tb.set_cursor(0);
    }

    assert_eq!(ui.focus_next(main), Some(field));
    assert_eq!(ui.focus_next(main), Some(field));
    assert_eq!(ui.focus_next(main), Some(field));
    assert_eq!(ui.focus_next(main), Some(ok));
}

#[test]
fn test_attach_to_second_screen_fails_and_keeps_membership() {
    let (mut ui, a) = setup();
    let b = ui.create_screen("b").unwrap();
    let ok = attach(&mut ui, a, Rect::new(0, 0, 10, 10), "ok", Button::new("OK"));

    let err = ui.set_screen(ok, b).unwrap_err();
    assert_eq!(
        err,
        Error::AlreadyAssigned { control: "ok".into(), screen: "main".into() }
    );
    assert_eq!(ui.screen(a).unwrap().members(), &[ok]);
    assert!(ui.screen(b).unwrap().members().is_empty());
    assert_eq!(ui.control(ok).unwrap().screen(), Some(a));

    // moving works once detached
    ui.drop_screen(ok);
    ui.set_screen(ok, b).unwrap();
    assert_eq!(ui.control(ok).unwrap().screen(), Some(b));
}

#[test]
fn test_checkbox_click_toggles_and_miss_clears_focus() {
    let (mut ui, main) = setup();
    let check = attach(&mut ui, main, Rect::new(10, 10, 20, 20), "agree", CheckBox::new(false));
    let value = |ui: &Ui| match ui.control(check).unwrap().kind() {
        ControlKind::CheckBox(c) => c.value(),
        _ => unreachable!(),
    };

    let hit = ui.click(check, &PointerState::at(15, 15), None).unwrap();
    assert_eq!(hit.hit, 1);
    assert!(value(&ui));
    assert_eq!(ui.is_focus(check), Ok(true));

    let miss = ui.click(check, &PointerState::at(100, 100), None).unwrap();
    assert_eq!(miss.hit, 0);
    assert!(value(&ui));
    assert_eq!(ui.focus(main), None);
}

#[test]
fn test_checkbox_renders_mark_when_checked() {
    let (mut ui, main) = setup();
    let check = attach(&mut ui, main, Rect::new(0, 0, 20, 20), "agree", CheckBox::new(false));
    ui.update(main);

    let away = PointerState::at(50, 50);
    let mut canvas = Surface::new(Size::new(60, 60));
    ui.render(main, &mut canvas, &away, Duration::ZERO);
    assert_eq!(canvas.get(10, 10), Some(Rgba::SILVER));

    ui.click(check, &PointerState::at(10, 10), None);
    ui.render(main, &mut canvas, &away, Duration::ZERO);
    assert_eq!(canvas.get(10, 10), Some(Rgba::BLACK));
}

#[test]
fn test_textbox_backspace_scenario() {
    let (mut ui, main) = setup();
    let field = attach(&mut ui, main, Rect::new(0, 0, 100, 20), "field", TextBox::new("abcde"));
    if let ControlKind::TextBox(tb) = ui.control_mut(field).unwrap().kind_mut() {
        tb.set_cursor(3);
    }

    assert!(ui.keydown(field, &KeyboardEvent::new("Backspace")));
    let ControlKind::TextBox(tb) = ui.control(field).unwrap().kind() else {
        panic!("expected a text box");
    };
    assert_eq!(tb.text(), "abde");
    assert_eq!(tb.cursor(), 2);
}

#[test]
fn test_slider_value_clamped() {
    let (mut ui, main) = setup();
    let level = attach(&mut ui, main, Rect::new(0, 0, 20, 105), "level", SliderV::default());
    let ControlKind::Slider(slider) = ui.control_mut(level).unwrap().kind_mut() else {
        panic!("expected a slider");
    };
    slider.set_value(-1.0);
    assert_eq!(slider.value(), slider.min());
    slider.set_value(1e9);
    assert_eq!(slider.value(), slider.max());
}

#[test]
fn test_slider_drag_follows_frames_and_ends_on_release() {
    let (mut ui, main) = setup();
    let level = attach(&mut ui, main, Rect::new(0, 0, 20, 105), "level", SliderV::default());
    ui.update(main);
    let slider = |ui: &Ui| match ui.control(level).unwrap().kind() {
        ControlKind::Slider(s) => (s.value(), s.is_dragging()),
        _ => unreachable!(),
    };
    let mut canvas = Surface::new(Size::new(40, 120));

    // value 50 puts the cursor bar at y 50..55
    let mut pointer = PointerState::default();
    let down = MouseEvent::down(MouseButton::Left, 5, 52);
    pointer.apply(&down);
    assert!(ui.dispatch(&InputEvent::Mouse(down), &pointer));
    assert_eq!(slider(&ui), (50.0, true));
    assert_eq!(ui.focus(main), Some(level));

    // held still: no jump
    ui.render(main, &mut canvas, &pointer, Duration::ZERO);
    assert_eq!(slider(&ui), (50.0, true));

    let held = PointerState::at(5, 27).pressing(MouseButtons::LEFT);
    ui.render(main, &mut canvas, &held, Duration::ZERO);
    assert_eq!(slider(&ui), (75.0, true));

    let released = PointerState::at(5, 90);
    ui.render(main, &mut canvas, &released, Duration::ZERO);
    assert_eq!(slider(&ui), (75.0, false));

    // later frames with a button held no longer move it
    ui.render(main, &mut canvas, &released.pressing(MouseButtons::LEFT), Duration::ZERO);
    assert_eq!(slider(&ui), (75.0, false));
}

#[test]
fn test_update_twice_is_bit_identical() {
    let (mut ui, main) = setup();
    let (ok, _) = ok_cancel(&mut ui, main);
    ui.update(main);
    let first = ui.control(ok).unwrap().midground.clone();
    ui.update(main);
    assert_eq!(ui.control(ok).unwrap().midground, first);
}
