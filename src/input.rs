//! Input events and the crossterm bridge.
//!
//! The toolkit has its own keyboard and mouse event types; this module
//! builds them from crossterm's terminal events. Routing to controls
//! happens in [`Ui::dispatch`](crate::ui::Ui::dispatch).
//!
//! Terminal mice report character cells, controls live in pixels. Every
//! mouse conversion takes the pixel size of one cell and reports the
//! pixel at the center of the cell under the pointer.
//!
//! ```ignore
//! use spark_widgets::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! let cell = ui.config().cell_size;
//! let mut pointer = PointerState::default();
//! loop {
//!     if let Some(event) = poll_event(Duration::from_millis(16), cell)? {
//!         if let InputEvent::Mouse(ref mouse) = event {
//!             pointer.apply(mouse);
//!         }
//!         ui.dispatch(&event, &pointer);
//!     }
//! }
//! ```

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    self as term, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;

use crate::canvas::PointerState;
use crate::types::{MouseButton, Point, Size};

// =============================================================================
// KEYBOARD TYPES
// =============================================================================

/// Held modifier keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    /// Auto-repeat while the key stays down.
    Repeat,
    Release,
}

impl From<KeyEventKind> for KeyState {
    fn from(kind: KeyEventKind) -> Self {
        match kind {
            KeyEventKind::Press => Self::Press,
            KeyEventKind::Repeat => Self::Repeat,
            KeyEventKind::Release => Self::Release,
        }
    }
}

/// A key going down, repeating or coming up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// A single character (`"a"`) or a key name (`"Enter"`, `"ArrowLeft"`,
    /// `"BackTab"`). Empty for keys the toolkit has no name for.
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Press of `key` with no modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_modifiers(key, Modifiers::default())
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press or auto-repeat (anything but a release).
    pub fn is_press(&self) -> bool {
        self.state != KeyState::Release
    }

    /// The character this event types, if it is a single printable char
    /// without ctrl/alt.
    pub fn printable(&self) -> Option<char> {
        if self.modifiers.ctrl || self.modifiers.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// MOUSE TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

/// A pointer event in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

impl MouseEvent {
    pub fn new(action: MouseAction, button: MouseButton, x: i32, y: i32) -> Self {
        Self { action, button, x, y }
    }

    pub fn down(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    pub fn up(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    /// Pointer motion with no button involved.
    pub fn move_to(x: i32, y: i32) -> Self {
        Self::new(MouseAction::Move, MouseButton::None, x, y)
    }

    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl PointerState {
    /// Fold a mouse event into the pointer snapshot.
    pub fn apply(&mut self, event: &MouseEvent) {
        self.pos = event.pos();
        match event.action {
            MouseAction::Down => self.buttons.insert(event.button.bit()),
            MouseAction::Up => self.buttons.remove(event.button.bit()),
            MouseAction::Drag => self.buttons.insert(event.button.bit()),
            MouseAction::Move | MouseAction::Scroll => {}
        }
    }
}

// =============================================================================
// INPUT EVENT
// =============================================================================

/// Anything [`Ui::dispatch`](crate::ui::Ui::dispatch) accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Key(KeyboardEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Focus changes, pastes and other terminal events the toolkit ignores.
    None,
}

// =============================================================================
// CROSSTERM BRIDGE
// =============================================================================

impl From<term::MouseButton> for MouseButton {
    fn from(button: term::MouseButton) -> Self {
        match button {
            term::MouseButton::Left => Self::Left,
            term::MouseButton::Right => Self::Right,
            term::MouseButton::Middle => Self::Middle,
        }
    }
}

/// Pixel at the center of the cell at (`column`, `row`).
pub fn cell_center(column: u16, row: u16, cell: Size) -> Point {
    Point::new(
        i32::from(column) * cell.w + cell.w / 2,
        i32::from(row) * cell.h + cell.h / 2,
    )
}

/// Translate a terminal mouse report; `cell` is the pixel size of one cell.
pub fn convert_mouse_event(event: term::MouseEvent, cell: Size) -> MouseEvent {
    let (action, button) = match event.kind {
        MouseEventKind::Down(b) => (MouseAction::Down, MouseButton::from(b)),
        MouseEventKind::Up(b) => (MouseAction::Up, MouseButton::from(b)),
        MouseEventKind::Drag(b) => (MouseAction::Drag, MouseButton::from(b)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::None),
        _ => (MouseAction::Scroll, MouseButton::None),
    };
    let at = cell_center(event.column, event.row, cell);
    MouseEvent::new(action, button, at.x, at.y)
}

fn key_name(code: KeyCode) -> Option<&'static str> {
    Some(match code {
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::BackTab => "BackTab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Esc => "Escape",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        _ => return None,
    })
}

/// Translate a terminal key report.
pub fn convert_key_event(event: term::KeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => String::from(c),
        KeyCode::F(n) => format!("F{n}"),
        code => key_name(code).unwrap_or_default().to_string(),
    };
    KeyboardEvent {
        key,
        modifiers: event.modifiers.into(),
        state: event.kind.into(),
    }
}

fn convert_event(event: term::Event, cell: Size) -> InputEvent {
    match event {
        term::Event::Key(key) => InputEvent::Key(convert_key_event(key)),
        term::Event::Mouse(mouse) => InputEvent::Mouse(convert_mouse_event(mouse, cell)),
        term::Event::Resize(columns, rows) => InputEvent::Resize(columns, rows),
        _ => InputEvent::None,
    }
}

/// Wait up to `timeout` for a terminal event. `Ok(None)` on timeout.
pub fn poll_event(timeout: Duration, cell: Size) -> io::Result<Option<InputEvent>> {
    if !term::poll(timeout)? {
        return Ok(None);
    }
    read_event(cell).map(Some)
}

/// Block until the terminal reports an event.
pub fn read_event(cell: Size) -> io::Result<InputEvent> {
    Ok(convert_event(term::read()?, cell))
}

/// Ask the terminal to report mouse events.
pub fn enable_mouse() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

pub fn disable_mouse() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}
