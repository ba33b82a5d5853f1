//! Ui - the application context
//!
//! Owns every control and screen. Controls live in an arena addressed by
//! [`ControlId`]; ids are never reused, and a control outlives its screen
//! membership so it can be moved between screens.
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{Button, Rect, Ui};
//!
//! let mut ui = Ui::default();
//! let main = ui.create_screen("main")?;
//! let ok = ui.create_control(Rect::new(0, 0, 100, 30), "ok", Button::new("OK"))?;
//! ui.set_screen(ok, main)?;
//! ui.set_current(main)?;
//! ui.update(main);
//! ```

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::Signal;
use tracing::{debug, trace, warn};

use crate::canvas::{Canvas, PointerState};
use crate::config::{NameScope, UiConfig};
use crate::control::{Click, Control, ControlId, ControlKind, FocusDirection, FocusRequest};
use crate::error::{Entity, Error, Result};
use crate::font::{Font, MonoFont};
use crate::input::{InputEvent, KeyboardEvent, MouseAction};
use crate::registry::ScreenRegistry;
use crate::screen::{Screen, ScreenId};
use crate::types::{MouseButton, Rect};

pub struct Ui {
    config: UiConfig,
    font: Rc<dyn Font>,
    controls: Vec<Control>,
    /// First control created under each name.
    control_names: HashMap<String, ControlId>,
    screens: Vec<Screen>,
    registry: ScreenRegistry,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl Ui {
    pub fn new(config: UiConfig) -> Self {
        let font: Rc<dyn Font> = Rc::new(MonoFont::new(config.font_size, config.font_color));
        Self {
            config,
            font,
            controls: Vec::new(),
            control_names: HashMap::new(),
            screens: Vec::new(),
            registry: ScreenRegistry::new(),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Font handed to newly created controls.
    pub fn font(&self) -> Rc<dyn Font> {
        Rc::clone(&self.font)
    }

    pub fn set_font(&mut self, font: Rc<dyn Font>) {
        self.font = font;
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Create a detached control.
    ///
    /// With [`NameScope::Global`] the name must be unused across the whole
    /// context; otherwise uniqueness is checked when attaching.
    pub fn create_control(&mut self, rect: Rect, name: &str, kind: impl Into<ControlKind>) -> Result<ControlId> {
        if self.config.name_scope == NameScope::Global && self.control_names.contains_key(name) {
            return Err(Error::duplicate(Entity::Control, name));
        }

        let mut kind = kind.into();
        if let ControlKind::TextBox(text_box) = &mut kind {
            text_box.set_blink_period(self.config.blink_period);
        }

        let id = ControlId(self.controls.len());
        debug!(control = %name, kind = kind.type_name(), index = id.0, "control created");
        self.controls.push(Control::new(rect, name, kind, Rc::clone(&self.font)));
        self.control_names.entry(name.to_string()).or_insert(id);
        Ok(id)
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.0)
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(id.0)
    }

    /// First control created with `name`.
    pub fn find_control(&self, name: &str) -> Result<ControlId> {
        self.control_names
            .get(name)
            .copied()
            .ok_or_else(|| Error::not_found(Entity::Control, name))
    }

    pub fn controls(&self) -> impl Iterator<Item = (ControlId, &Control)> {
        self.controls.iter().enumerate().map(|(i, c)| (ControlId(i), c))
    }

    fn control_or_err(&self, id: ControlId) -> Result<&Control> {
        self.controls
            .get(id.0)
            .ok_or_else(|| Error::not_found(Entity::Control, format!("#{}", id.0)))
    }

    // =========================================================================
    // Screens
    // =========================================================================

    pub fn create_screen(&mut self, name: &str) -> Result<ScreenId> {
        let id = ScreenId(self.screens.len());
        self.registry.register(name, id)?;
        self.screens.push(Screen::new(
            id,
            name,
            self.config.screen_background,
            self.config.focus_border,
        ));
        debug!(screen = %name, "screen created");
        Ok(id)
    }

    pub fn screen(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.get(id.0)
    }

    pub fn screen_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        self.screens.get_mut(id.0)
    }

    pub fn screen_named(&self, name: &str) -> Result<ScreenId> {
        self.registry.lookup(name)
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    fn screen_index(&self, id: ScreenId) -> Result<usize> {
        if id.0 < self.screens.len() {
            Ok(id.0)
        } else {
            Err(Error::not_found(Entity::Screen, format!("#{}", id.0)))
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Attach `control` to `screen`.
    ///
    /// Fails with `AlreadyAssigned` if the control belongs to any screen
    /// (including this one) and with `DuplicateName` if the screen already
    /// has a control of that name. Membership is unchanged on failure.
    pub fn set_screen(&mut self, control: ControlId, screen: ScreenId) -> Result<()> {
        let target = self.screen_index(screen)?;
        let c = self.control_or_err(control)?;
        if let Some(owner) = c.screen() {
            let err = Error::AlreadyAssigned {
                control: c.name().to_string(),
                screen: self.screens[owner.0].name().to_string(),
            };
            warn!(%err, "attach refused");
            return Err(err);
        }
        self.screens[target].add_control(&mut self.controls, control)
    }

    /// Same as [`Ui::set_screen`], screen first.
    pub fn add_control(&mut self, screen: ScreenId, control: ControlId) -> Result<()> {
        self.set_screen(control, screen)
    }

    /// Detach `control` from its screen. Returns the screen it left, or
    /// `None` if it was not attached.
    pub fn drop_screen(&mut self, control: ControlId) -> Option<ScreenId> {
        let c = self.controls.get(control.0)?;
        let owner = c.screen()?;
        let name = c.name().to_string();
        self.screens[owner.0]
            .remove_control(&mut self.controls, &name)
            .ok()
            .map(|_| owner)
    }

    /// Detach the member called `name` from `screen`.
    pub fn remove_control(&mut self, screen: ScreenId, name: &str) -> Result<ControlId> {
        let index = self.screen_index(screen)?;
        self.screens[index].remove_control(&mut self.controls, name)
    }

    /// Look up a member of `screen` by name.
    pub fn get_control(&self, screen: ScreenId, name: &str) -> Result<ControlId> {
        let index = self.screen_index(screen)?;
        self.screens[index]
            .find(&self.controls, name)
            .ok_or_else(|| Error::not_found(Entity::Control, name))
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Change a control's focus order. On an attached control a conflict
    /// is resolved the same way as on attach.
    pub fn set_focus_order(&mut self, control: ControlId, order: u32) -> Result<u32> {
        let owner = self.control_or_err(control)?.screen();
        self.controls[control.0].set_focus_order(order);
        if let Some(owner) = owner {
            self.screens[owner.0].resolve_focus_order(&mut self.controls, control);
        }
        Ok(self.controls[control.0].focus_order())
    }

    /// Focus `target` on `screen` (`None` clears). False when refused.
    pub fn set_focus(&mut self, screen: ScreenId, target: Option<ControlId>) -> bool {
        match self.screens.get(screen.0) {
            Some(s) => s.set_focus(&self.controls, target),
            None => false,
        }
    }

    pub fn focus(&self, screen: ScreenId) -> Option<ControlId> {
        self.screens.get(screen.0)?.focus(&self.controls)
    }

    pub fn focus_signal(&self, screen: ScreenId) -> Option<Signal<Option<ControlId>>> {
        self.screens.get(screen.0).map(Screen::focus_signal)
    }

    pub fn focus_next(&mut self, screen: ScreenId) -> Option<ControlId> {
        self.step_focus(screen, FocusDirection::Next)
    }

    pub fn focus_prev(&mut self, screen: ScreenId) -> Option<ControlId> {
        self.step_focus(screen, FocusDirection::Prev)
    }

    fn step_focus(&mut self, screen: ScreenId, dir: FocusDirection) -> Option<ControlId> {
        let s = self.screens.get(screen.0)?;
        s.step_focus(&mut self.controls, dir)
    }

    /// Whether `control` holds focus on its screen. A detached control is
    /// an error rather than `false`.
    pub fn is_focus(&self, control: ControlId) -> Result<bool> {
        let c = self.control_or_err(control)?;
        let owner = c.screen().ok_or_else(|| Error::Detached {
            control: c.name().to_string(),
        })?;
        Ok(self.screens[owner.0].focus(&self.controls) == Some(control))
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Deliver a pointer press to `control` and apply the focus request to
    /// its screen.
    pub fn click(&mut self, control: ControlId, pointer: &PointerState, button: Option<MouseButton>) -> Option<Click> {
        let c = self.controls.get_mut(control.0)?;
        let click = c.click(pointer, button);
        if let Some(owner) = c.screen() {
            let screen = &self.screens[owner.0];
            match click.focus {
                FocusRequest::Acquire => {
                    screen.set_focus(&self.controls, Some(control));
                }
                FocusRequest::Clear => {
                    screen.set_focus(&self.controls, None);
                }
                FocusRequest::Keep => {}
            }
        }
        Some(click)
    }

    /// Deliver a key press to `control`. Returns true if consumed.
    pub fn keydown(&mut self, control: ControlId, event: &KeyboardEvent) -> bool {
        self.controls
            .get_mut(control.0)
            .is_some_and(|c| c.keydown(event))
    }

    /// Route an input event to the current screen.
    ///
    /// - pointer down: `click` on the topmost hit control; a miss clears focus
    /// - Tab / Shift+Tab / BackTab: focus traversal
    /// - other key presses: the focused control's `keydown`, rebuilding its
    ///   layers when consumed
    ///
    /// `pointer` must already reflect the event (see [`PointerState::apply`]).
    /// Returns true if anything reacted.
    pub fn dispatch(&mut self, event: &InputEvent, pointer: &PointerState) -> bool {
        let Some(screen) = self.current() else {
            return false;
        };

        match event {
            InputEvent::Mouse(mouse) if mouse.action == MouseAction::Down => {
                let hit = self.screens[screen.0].hit_test(&self.controls, pointer);
                match hit {
                    Some(id) => {
                        let click = self.click(id, pointer, Some(mouse.button));
                        if let Some(c) = self.controls.get_mut(id.0) {
                            c.update();
                        }
                        click.is_some_and(|c| c.hit != 0)
                    }
                    None => {
                        self.set_focus(screen, None);
                        false
                    }
                }
            }
            InputEvent::Key(key) if key.is_press() => match key.key.as_str() {
                "Tab" if key.modifiers.shift => self.focus_prev(screen).is_some(),
                "Tab" => self.focus_next(screen).is_some(),
                "BackTab" => self.focus_prev(screen).is_some(),
                _ => {
                    let Some(id) = self.focus(screen) else {
                        return false;
                    };
                    let consumed = self.keydown(id, key);
                    if consumed {
                        self.controls[id.0].update();
                    }
                    trace!(key = %key.key, consumed, "key dispatched");
                    consumed
                }
            },
            _ => false,
        }
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Rebuild the layers of every control on `screen`.
    pub fn update(&mut self, screen: ScreenId) {
        if let Some(s) = self.screens.get(screen.0) {
            s.update(&mut self.controls);
        }
    }

    /// Draw `screen` onto `canvas`. Returns the number of controls drawn.
    pub fn render(
        &mut self,
        screen: ScreenId,
        canvas: &mut dyn Canvas,
        pointer: &PointerState,
        dt: Duration,
    ) -> usize {
        match self.screens.get(screen.0) {
            Some(s) => s.render(&mut self.controls, canvas, pointer, dt),
            None => 0,
        }
    }

    /// Draw the current screen, if any.
    pub fn render_current(&mut self, canvas: &mut dyn Canvas, pointer: &PointerState, dt: Duration) -> usize {
        match self.current() {
            Some(screen) => self.render(screen, canvas, pointer, dt),
            None => 0,
        }
    }

    // =========================================================================
    // Screen switching
    // =========================================================================

    pub fn set_current(&mut self, screen: ScreenId) -> Result<()> {
        self.screen_index(screen)?;
        self.registry.set_current(screen);
        Ok(())
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.registry.current()
    }

    pub fn previous(&self) -> Option<ScreenId> {
        self.registry.previous()
    }

    /// Return to the previous screen. False when there is none.
    pub fn go_back(&mut self) -> bool {
        self.registry.go_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Button, Label, TextBox};
    use crate::input::{Modifiers, MouseEvent};
    use crate::surface::Surface;
    use crate::types::{MouseButtons, Rgba, Size};

    fn setup() -> (Ui, ScreenId) {
        let mut ui = Ui::default();
        let main = ui.create_screen("main").unwrap();
        ui.set_current(main).unwrap();
        (ui, main)
    }

    fn button(ui: &mut Ui, screen: ScreenId, name: &str, rect: Rect) -> ControlId {
        let id = ui.create_control(rect, name, Button::new(name)).unwrap();
        ui.set_screen(id, screen).unwrap();
        id
    }

    #[test]
    fn test_duplicate_screen_name() {
        let (mut ui, _) = setup();
        assert_eq!(
            ui.create_screen("main"),
            Err(Error::duplicate(Entity::Screen, "main"))
        );
        assert_eq!(
            ui.screen_named("nope"),
            Err(Error::not_found(Entity::Screen, "nope"))
        );
    }

    #[test]
    fn test_per_screen_names() {
        let (mut ui, main) = setup();
        let other = ui.create_screen("other").unwrap();
        button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
        button(&mut ui, other, "ok", Rect::new(0, 0, 10, 10));

        let dup = ui.create_control(Rect::new(0, 0, 10, 10), "ok", Button::new("x")).unwrap();
        assert_eq!(
            ui.set_screen(dup, main),
            Err(Error::duplicate(Entity::Control, "ok"))
        );
        assert_eq!(ui.control(dup).unwrap().screen(), None);
        assert_eq!(ui.screen(main).unwrap().members().len(), 1);
    }

    #[test]
    fn test_global_names() {
        let mut ui = Ui::new(UiConfig::default().with_name_scope(NameScope::Global));
        ui.create_control(Rect::new(0, 0, 10, 10), "ok", Button::new("a")).unwrap();
        assert!(matches!(
            ui.create_control(Rect::new(0, 0, 10, 10), "ok", Button::new("b")),
            Err(Error::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_remove_and_drop() {
        let (mut ui, main) = setup();
        let ok = button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
        let cancel = button(&mut ui, main, "cancel", Rect::new(20, 0, 10, 10));
        ui.set_focus(main, Some(ok));

        assert_eq!(ui.remove_control(main, "ok"), Ok(ok));
        assert_eq!(ui.control(ok).unwrap().screen(), None);
        assert_eq!(ui.focus(main), None);
        assert_eq!(
            ui.remove_control(main, "ok"),
            Err(Error::not_found(Entity::Control, "ok"))
        );

        assert_eq!(ui.drop_screen(cancel), Some(main));
        assert_eq!(ui.drop_screen(cancel), None);
        assert!(ui.screen(main).unwrap().members().is_empty());
    }

    #[test]
    fn test_set_focus_gated() {
        let (mut ui, main) = setup();
        let ok = button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
        let label = ui.create_control(Rect::new(0, 20, 10, 10), "hint", Label::new("hi")).unwrap();
        ui.set_screen(label, main).unwrap();

        assert!(!ui.set_focus(main, Some(label)));
        assert_eq!(ui.focus(main), None);

        ui.control_mut(ok).unwrap().enable = false;
        assert!(!ui.set_focus(main, Some(ok)));

        ui.control_mut(ok).unwrap().enable = true;
        assert!(ui.set_focus(main, Some(ok)));
        assert_eq!(ui.is_focus(ok), Ok(true));

        // disabling the focused control drops it from `focus()`
        ui.control_mut(ok).unwrap().enable = false;
        assert_eq!(ui.focus(main), None);
    }

    #[test]
    fn test_is_focus_detached() {
        let (mut ui, _) = setup();
        let lone = ui.create_control(Rect::new(0, 0, 10, 10), "lone", Button::new("x")).unwrap();
        assert_eq!(
            ui.is_focus(lone),
            Err(Error::Detached { control: "lone".into() })
        );
    }

    #[test]
    fn test_set_focus_order_resolves_conflict() {
        let (mut ui, main) = setup();
        let a = button(&mut ui, main, "a", Rect::new(0, 0, 10, 10));
        let b = button(&mut ui, main, "b", Rect::new(20, 0, 10, 10));
        assert_eq!(ui.control(b).unwrap().focus_order(), 1);

        assert_eq!(ui.set_focus_order(a, 5), Ok(5));
        assert_eq!(ui.set_focus_order(b, 5), Ok(0));
    }

    #[test]
    fn test_dispatch_click_and_miss() {
        let (mut ui, main) = setup();
        let ok = button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
        ui.update(main);

        let mut pointer = PointerState::default();
        let down = MouseEvent::down(MouseButton::Left, 5, 5);
        pointer.apply(&down);
        assert!(ui.dispatch(&InputEvent::Mouse(down), &pointer));
        assert_eq!(ui.focus(main), Some(ok));

        let miss = MouseEvent::down(MouseButton::Left, 50, 50);
        pointer.apply(&miss);
        assert!(!ui.dispatch(&InputEvent::Mouse(miss), &pointer));
        assert_eq!(ui.focus(main), None);
    }

    #[test]
    fn test_dispatch_topmost_wins() {
        let (mut ui, main) = setup();
        button(&mut ui, main, "under", Rect::new(0, 0, 20, 20));
        let over = button(&mut ui, main, "over", Rect::new(5, 5, 20, 20));

        let pointer = PointerState::at(10, 10).pressing(MouseButtons::LEFT);
        ui.dispatch(&InputEvent::Mouse(MouseEvent::down(MouseButton::Left, 10, 10)), &pointer);
        assert_eq!(ui.focus(main), Some(over));
    }

    #[test]
    fn test_dispatch_keys() {
        let (mut ui, main) = setup();
        let name = ui.create_control(Rect::new(0, 0, 100, 20), "name", TextBox::new("ab")).unwrap();
        ui.set_screen(name, main).unwrap();
        let pointer = PointerState::default();

        assert!(!ui.dispatch(&InputEvent::Key(KeyboardEvent::new("x")), &pointer));
        assert!(ui.dispatch(&InputEvent::Key(KeyboardEvent::new("Tab")), &pointer));
        assert!(ui.dispatch(&InputEvent::Key(KeyboardEvent::new("c")), &pointer));

        let ControlKind::TextBox(tb) = ui.control(name).unwrap().kind() else {
            panic!("expected a text box");
        };
        assert_eq!(tb.text(), "abc");
    }

    #[test]
    fn test_dispatch_back_tab_and_shift_tab() {
        let (mut ui, main) = setup();
        let a = button(&mut ui, main, "a", Rect::new(0, 0, 10, 10));
        let b = button(&mut ui, main, "b", Rect::new(20, 0, 10, 10));
        let c = button(&mut ui, main, "c", Rect::new(40, 0, 10, 10));
        let pointer = PointerState::default();
        let key = |k: KeyboardEvent| InputEvent::Key(k);

        assert!(ui.dispatch(&key(KeyboardEvent::new("BackTab")), &pointer));
        assert_eq!(ui.focus(main), Some(c));

        let shift_tab = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert!(ui.dispatch(&key(shift_tab.clone()), &pointer));
        assert_eq!(ui.focus(main), Some(b));
        assert!(ui.dispatch(&key(shift_tab), &pointer));
        assert_eq!(ui.focus(main), Some(a));

        // terminals send BackTab with shift held
        let back_tab = KeyboardEvent::with_modifiers("BackTab", Modifiers::shift());
        assert!(ui.dispatch(&key(back_tab), &pointer));
        assert_eq!(ui.focus(main), Some(c));

        assert!(ui.dispatch(&key(KeyboardEvent::new("Tab")), &pointer));
        assert_eq!(ui.focus(main), Some(a));
    }

    #[test]
    fn test_refusals_log_warnings() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct WarnCount(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCount {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == tracing::Level::WARN {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCount(Arc::clone(&warnings)));

        tracing::subscriber::with_default(subscriber, || {
            let (mut ui, main) = setup();
            let other = ui.create_screen("other").unwrap();
            let ok = button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
            let hint = ui.create_control(Rect::new(0, 20, 10, 10), "hint", Label::new("hi")).unwrap();
            ui.set_screen(hint, main).unwrap();
            assert!(ui.set_focus(main, Some(ok)));
            assert_eq!(warnings.load(Ordering::SeqCst), 0);

            assert!(!ui.set_focus(main, Some(hint)));
            assert!(!ui.set_focus(other, Some(ok)));
            assert!(ui.set_screen(ok, other).is_err());
            assert_eq!(warnings.load(Ordering::SeqCst), 3);
        });
    }

    #[test]
    fn test_render_draws_focus_outline() {
        let (mut ui, main) = setup();
        let ok = button(&mut ui, main, "ok", Rect::new(0, 0, 40, 20));
        let cancel = button(&mut ui, main, "cancel", Rect::new(0, 30, 40, 20));
        ui.update(main);
        let away = PointerState::at(49, 59);
        let mut canvas = Surface::new(Size::new(50, 60));

        ui.set_focus(main, Some(ok));
        ui.render(main, &mut canvas, &away, Duration::ZERO);
        let focus = ui.config().focus_border;
        assert_eq!(focus.width, 2);
        assert_eq!(canvas.get(0, 0), Some(focus.color));
        assert_eq!(canvas.get(1, 10), Some(focus.color));
        assert_eq!(canvas.get(2, 10), Some(Rgba::BLUE));
        assert_eq!(canvas.get(0, 30), Some(Rgba::BLUE));

        ui.focus_next(main);
        assert_eq!(ui.focus(main), Some(cancel));
        ui.render(main, &mut canvas, &away, Duration::ZERO);
        assert_eq!(canvas.get(0, 0), Some(Rgba::BLUE));
        assert_eq!(canvas.get(0, 30), Some(focus.color));
    }

    #[test]
    fn test_render_image_background_under_controls() {
        let (mut ui, main) = setup();
        button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
        let picture = Surface::filled(Size::new(20, 20), Rgba::RED);
        ui.screen_mut(main).unwrap().background = crate::screen::ScreenBackground::Image(picture);
        ui.update(main);

        let mut canvas = Surface::filled(Size::new(30, 30), Rgba::BLACK);
        ui.render(main, &mut canvas, &PointerState::at(29, 29), Duration::ZERO);
        assert_eq!(canvas.get(15, 15), Some(Rgba::RED));
        assert_eq!(canvas.get(25, 25), Some(Rgba::BLACK));
        assert_eq!(canvas.get(1, 1), Some(Rgba::BLUE));
    }

    #[test]
    fn test_textbox_gets_config_blink() {
        let mut ui = Ui::new(UiConfig::default().with_blink_period(Duration::from_millis(500)));
        let id = ui.create_control(Rect::new(0, 0, 10, 10), "t", TextBox::new("")).unwrap();
        let ControlKind::TextBox(tb) = ui.control(id).unwrap().kind() else {
            panic!("expected a text box");
        };
        assert_eq!(tb.blink_period(), Duration::from_millis(500));
    }

    #[test]
    fn test_render_current_screen() {
        let (mut ui, main) = setup();
        button(&mut ui, main, "ok", Rect::new(0, 0, 10, 10));
        ui.screen_mut(main).unwrap().background = crate::screen::ScreenBackground::Color(Rgba::RED);
        ui.update(main);

        let mut canvas = Surface::new(Size::new(30, 30));
        assert_eq!(ui.render_current(&mut canvas, &PointerState::at(29, 29), Duration::ZERO), 1);
        assert_eq!(canvas.get(29, 29), Some(Rgba::RED));
        assert_eq!(canvas.get(0, 0), Some(Rgba::BLUE));
    }

    #[test]
    fn test_screen_switching() {
        let (mut ui, main) = setup();
        let settings = ui.create_screen("settings").unwrap();
        ui.set_current(settings).unwrap();
        assert_eq!(ui.previous(), Some(main));
        assert!(ui.go_back());
        assert_eq!(ui.current(), Some(main));
        assert!(ui.set_current(ScreenId(9)).is_err());
    }
}
