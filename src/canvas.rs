//! Canvas Module - Drawing target and pointer queries
//!
//! The toolkit never talks to a window system directly. Everything it draws
//! goes through a [`Canvas`], and everything it knows about the pointer comes
//! from a [`PointerState`] snapshot that the event loop keeps current.
//!
//! [`Surface`] implements `Canvas`, so an off-screen surface can stand in for
//! the display (that is how the tests composite screens).

use crate::surface::Surface;
use crate::types::{MouseButtons, Point, Rect, Rgba, Size};

// =============================================================================
// CANVAS
// =============================================================================

/// A drawing target.
pub trait Canvas {
    /// Drawable area.
    fn size(&self) -> Size;

    /// Replace every pixel with `color`.
    fn fill(&mut self, color: Rgba);

    /// Replace the pixels inside `rect` with `color`.
    fn fill_rect(&mut self, color: Rgba, rect: Rect);

    /// Stroke `rect` with a `width`-pixel outline (0 = filled).
    fn draw_rect(&mut self, color: Rgba, rect: Rect, width: i32);

    /// Draw a line between two points.
    fn draw_line(&mut self, color: Rgba, from: Point, to: Point, width: i32);

    /// Alpha-blend `surface` with its top-left corner at `at`.
    fn blit(&mut self, surface: &Surface, at: Point);
}

// =============================================================================
// POINTER STATE
// =============================================================================

/// Where the pointer is and which buttons are held.
///
/// Updated by [`PointerState::apply`] from input events; read by hit
/// testing (`is_hover`, `is_down`) and slider dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub pos: Point,
    pub buttons: MouseButtons,
}

impl PointerState {
    pub fn new(pos: Point, buttons: MouseButtons) -> Self {
        Self { pos, buttons }
    }

    /// Pointer at `pos` with no buttons held.
    pub fn at(x: i32, y: i32) -> Self {
        Self::new(Point::new(x, y), MouseButtons::empty())
    }

    /// Same position, with `buttons` held.
    pub fn pressing(self, buttons: MouseButtons) -> Self {
        Self { buttons, ..self }
    }

    /// True if any button is held.
    pub fn any_pressed(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// Point-in-rectangle test against the pointer position.
    pub fn collides(&self, rect: Rect) -> bool {
        rect.contains(self.pos)
    }
}
