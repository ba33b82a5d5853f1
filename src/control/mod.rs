//! Controls - the shared control record and its layered render pipeline
//!
//! A [`Control`] holds everything every widget has in common: geometry,
//! flags, focus order, three [`LayerSet`]s and a border. What makes a
//! button a button lives in its [`ControlKind`] behavior, dispatched by
//! `match` from the shared pipeline:
//!
//! - `update()` rebuilds all layers from scratch (the toolkit never
//!   auto-invalidates; call it after changing anything visual)
//! - `render()` picks one visual state and blits background, midground and
//!   foreground in that order, then the focus outline
//! - `click()` / `keydown()` mutate behavior state and report what should
//!   happen to screen focus
//!
//! # Visual state selection
//!
//! ```text
//! !enable            → Disabled
//! hovered && down    → Down
//! hovered            → Hover
//! otherwise          → Normal
//! ```
//!
//! Controls are created and owned by a [`Ui`](crate::ui::Ui) context and
//! addressed by [`ControlId`].

mod button;
mod checkbox;
mod image;
mod label;
mod slider;
mod textbox;

pub use button::Button;
pub use checkbox::CheckBox;
pub use image::Image;
pub use label::Label;
pub use slider::{SliderV, SliderZone};
pub use textbox::TextBox;

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

use bitflags::bitflags;
use tracing::trace;

use crate::canvas::{Canvas, PointerState};
use crate::font::Font;
use crate::layer::{Border, LayerSet, VisualState};
use crate::screen::ScreenId;
use crate::input::KeyboardEvent;
use crate::types::{MouseButton, MouseButtons, Point, Rect, Size};

// =============================================================================
// IDS AND FOCUS TYPES
// =============================================================================

/// Handle to a control inside its [`Ui`](crate::ui::Ui) context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    /// Position of the control in its context's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Direction of keyboard focus traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Prev,
    Next,
}

bitflags! {
    /// Directions a control currently lets focus leave through.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FocusExits: u8 {
        const PREV = 1;
        const NEXT = 2;
    }
}

impl From<FocusDirection> for FocusExits {
    fn from(dir: FocusDirection) -> Self {
        match dir {
            FocusDirection::Prev => Self::PREV,
            FocusDirection::Next => Self::NEXT,
        }
    }
}

/// What a click asks the owning screen to do with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// Focus this control.
    Acquire,
    /// Leave focus where it is.
    Keep,
    /// Nothing focused.
    Clear,
}

/// Outcome of [`Control::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    /// The `is_hover()` code at click time (0 = miss).
    pub hit: u8,
    pub focus: FocusRequest,
}

// =============================================================================
// BEHAVIORS
// =============================================================================

/// Per-widget behavior and state.
pub enum ControlKind {
    Button(Button),
    Label(Label),
    Image(Image),
    CheckBox(CheckBox),
    TextBox(TextBox),
    Slider(SliderV),
}

impl From<Button> for ControlKind {
    fn from(b: Button) -> Self {
        Self::Button(b)
    }
}

impl From<Label> for ControlKind {
    fn from(l: Label) -> Self {
        Self::Label(l)
    }
}

impl From<Image> for ControlKind {
    fn from(i: Image) -> Self {
        Self::Image(i)
    }
}

impl From<CheckBox> for ControlKind {
    fn from(c: CheckBox) -> Self {
        Self::CheckBox(c)
    }
}

impl From<TextBox> for ControlKind {
    fn from(t: TextBox) -> Self {
        Self::TextBox(t)
    }
}

impl From<SliderV> for ControlKind {
    fn from(s: SliderV) -> Self {
        Self::Slider(s)
    }
}

impl ControlKind {
    /// Short name of the behavior, for logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::Label(_) => "label",
            Self::Image(_) => "image",
            Self::CheckBox(_) => "checkbox",
            Self::TextBox(_) => "textbox",
            Self::Slider(_) => "slider",
        }
    }
}

/// Only the primary button (or an unspecified one) triggers behaviors.
fn is_primary(button: Option<MouseButton>) -> bool {
    matches!(button, None | Some(MouseButton::Left))
}

// =============================================================================
// CONTROL
// =============================================================================

/// A single UI element occupying a fixed rectangle.
pub struct Control {
    name: String,
    pos: Point,
    size: Size,
    /// Drawn at all. Invisible controls are never hovered.
    pub visible: bool,
    /// Interacts with the user. Disabled controls draw their disabled layers.
    pub enable: bool,
    /// May receive keyboard focus.
    pub focusable: bool,
    focus_order: u32,
    /// Arbitrary user payload.
    pub tag: Option<Box<dyn Any>>,
    pub border: Border,
    pub background: LayerSet,
    pub midground: LayerSet,
    pub foreground: LayerSet,
    font: Rc<dyn Font>,
    screen: Option<ScreenId>,
    kind: ControlKind,
}

impl Control {
    pub(crate) fn new(rect: Rect, name: impl Into<String>, kind: ControlKind, font: Rc<dyn Font>) -> Self {
        let mut control = Self {
            name: name.into(),
            pos: rect.pos(),
            size: rect.size(),
            visible: true,
            enable: true,
            focusable: true,
            focus_order: 0,
            tag: None,
            border: Border::default(),
            background: LayerSet::default(),
            midground: LayerSet::default(),
            foreground: LayerSet::default(),
            font,
            screen: None,
            kind,
        };

        match control.kind {
            ControlKind::Label(_) => control.focusable = false,
            ControlKind::Image(_) => {
                control.focusable = false;
                control.border.show = false;
            }
            _ => {}
        }

        control
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Screen-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.pos, self.size)
    }

    /// Traversal rank inside the owning screen.
    pub fn focus_order(&self) -> u32 {
        self.focus_order
    }

    pub(crate) fn set_focus_order(&mut self, order: u32) {
        self.focus_order = order;
    }

    /// Owning screen, if attached.
    pub fn screen(&self) -> Option<ScreenId> {
        self.screen
    }

    pub(crate) fn attach(&mut self, screen: ScreenId) {
        self.screen = Some(screen);
    }

    pub(crate) fn detach(&mut self) {
        self.screen = None;
    }

    pub fn font(&self) -> &Rc<dyn Font> {
        &self.font
    }

    /// Swap the font. Takes effect on the next `update()`.
    pub fn set_font(&mut self, font: Rc<dyn Font>) {
        self.font = font;
    }

    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ControlKind {
        &mut self.kind
    }

    /// True if focus is allowed to land here right now.
    pub fn can_focus(&self) -> bool {
        self.focusable && self.enable
    }

    // -------------------------------------------------------------------------
    // Hit testing
    // -------------------------------------------------------------------------

    /// 0 if the pointer is not over the control, nonzero otherwise.
    ///
    /// Plain controls answer 1; sliders answer their [`SliderZone`] code.
    /// Invisible controls always answer 0.
    pub fn is_hover(&self, pointer: &PointerState) -> u8 {
        if !self.visible {
            return 0;
        }
        match &self.kind {
            ControlKind::Slider(slider) => slider.zone(self.rect(), pointer) as u8,
            _ => pointer.collides(self.rect()) as u8,
        }
    }

    /// Buttons held over a hovered, enabled control (left=1, right=2,
    /// middle=4). `button` narrows the answer to one button.
    pub fn is_down(&self, pointer: &PointerState, button: Option<MouseButton>) -> MouseButtons {
        if !self.enable || self.is_hover(pointer) == 0 {
            return MouseButtons::empty();
        }
        match button {
            Some(button) => pointer.buttons & button.bit(),
            None => pointer.buttons,
        }
    }

    /// Which visual state `render` would draw right now.
    pub fn visual_state(&self, pointer: &PointerState) -> VisualState {
        if !self.enable {
            VisualState::Disabled
        } else if self.is_hover(pointer) != 0 {
            if self.is_down(pointer, None).is_empty() {
                VisualState::Hover
            } else {
                VisualState::Down
            }
        } else {
            VisualState::Normal
        }
    }

    // -------------------------------------------------------------------------
    // Focus negotiation
    // -------------------------------------------------------------------------

    /// Directions focus may currently leave through.
    pub fn focus_exits(&self) -> FocusExits {
        match &self.kind {
            ControlKind::TextBox(text_box) => text_box.focus_exits(),
            _ => FocusExits::all(),
        }
    }

    /// Ask the control to give up focus toward `dir`.
    ///
    /// Returns false when it keeps focus because internal state (a text
    /// cursor) has not reached that edge yet; that state moves one step as
    /// a side effect.
    pub fn change_focus(&mut self, dir: FocusDirection) -> bool {
        match &mut self.kind {
            ControlKind::TextBox(text_box) => text_box.change_focus(dir),
            _ => true,
        }
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    /// Rebuild background, midground and foreground from scratch.
    pub fn update(&mut self) {
        let size = self.size;
        let bounds = Rect::new(0, 0, size.w, size.h);
        let font = Rc::clone(&self.font);

        if let ControlKind::Label(_) = self.kind {
            self.background.flatten();
        }

        self.background.rebuild_filled(size);
        self.midground.rebuild_clear(size);
        self.foreground.rebuild_clear(size);

        match &mut self.kind {
            ControlKind::Button(button) => button.paint(&mut self.midground, size, &*font),
            ControlKind::Label(label) => label.paint(&mut self.midground, size, &*font),
            ControlKind::Image(image) => image.paint(&mut self.midground, size),
            ControlKind::TextBox(text_box) => text_box.paint(&mut self.midground, size, &*font),
            ControlKind::Slider(slider) => slider.paint(&mut self.midground, size),
            ControlKind::CheckBox(_) => {}
        }

        let border = self.border;
        self.midground.for_each_mut(|_, surface| border.stroke(surface, bounds));

        match &mut self.kind {
            ControlKind::CheckBox(check_box) => check_box.rebuild_checked(&self.midground, size),
            ControlKind::Slider(slider) => slider.rebuild_cursor(size),
            _ => {}
        }

        trace!(control = %self.name, kind = self.kind.type_name(), "layers rebuilt");
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Draw the control onto `canvas`. Returns true iff it was drawn.
    ///
    /// `focus` is the owning screen's focus border when this control holds
    /// focus, `None` otherwise. `dt` is the time since the previous frame;
    /// it drives caret blinking.
    pub fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        pointer: &PointerState,
        focus: Option<&Border>,
        dt: Duration,
    ) -> bool {
        if !self.visible {
            return false;
        }

        let rect = self.rect();
        let enable = self.enable;
        match &mut self.kind {
            ControlKind::Slider(slider) => slider.track_drag(rect, enable, pointer),
            ControlKind::TextBox(text_box) => text_box.advance_blink(focus.is_some(), dt),
            _ => {}
        }

        let state = self.visual_state(pointer);
        let midground = match &self.kind {
            ControlKind::CheckBox(check_box) => check_box.displayed(&self.midground),
            _ => &self.midground,
        };

        for layer in [&self.background, midground, &self.foreground] {
            if let Some(surface) = layer.surface(state) {
                canvas.blit(surface, self.pos);
            }
        }

        match &self.kind {
            ControlKind::Slider(slider) => slider.render_cursor(canvas, rect, state),
            ControlKind::TextBox(text_box) if focus.is_some() => {
                text_box.render_caret(canvas, self.pos, self.size, &*self.font)
            }
            _ => {}
        }

        if let Some(border) = focus {
            if border.show {
                canvas.draw_rect(border.color, rect, border.width);
            }
        }

        true
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// React to a pointer press.
    ///
    /// A hit on an enabled, focusable control asks for focus; a miss asks
    /// for focus to be cleared. Behaviors react to primary-button hits on
    /// enabled controls only.
    pub fn click(&mut self, pointer: &PointerState, button: Option<MouseButton>) -> Click {
        let hit = self.is_hover(pointer);
        if hit == 0 {
            return Click { hit, focus: FocusRequest::Clear };
        }

        let focus = if self.can_focus() {
            FocusRequest::Acquire
        } else {
            FocusRequest::Keep
        };

        if self.enable && is_primary(button) {
            let rect = self.rect();
            let font = Rc::clone(&self.font);
            match &mut self.kind {
                ControlKind::Button(b) => b.activate(),
                ControlKind::CheckBox(c) => c.toggle(),
                ControlKind::TextBox(t) => t.click_at(pointer.pos.x - rect.x, rect.size(), &*font),
                ControlKind::Slider(s) => s.press(hit, rect, pointer),
                ControlKind::Label(_) | ControlKind::Image(_) => {}
            }
        }

        trace!(control = %self.name, hit, ?focus, "click");
        Click { hit, focus }
    }

    /// React to a key press. Returns true if the control consumed it.
    pub fn keydown(&mut self, event: &KeyboardEvent) -> bool {
        if !self.enable || !event.is_press() {
            return false;
        }
        match &mut self.kind {
            ControlKind::TextBox(text_box) => text_box.keydown(event),
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Behavior helpers
    // -------------------------------------------------------------------------

    /// Rescale an image control's picture to the control's box.
    /// Returns false for other kinds or when no image is loaded.
    pub fn fit_image(&mut self) -> bool {
        let size = self.size;
        match &mut self.kind {
            ControlKind::Image(image) => image.fit(size),
            _ => false,
        }
    }
}
