//! Core types for spark-widgets.
//!
//! Geometry, colors, pointer buttons and alignment. Everything that flows
//! between controls, surfaces and the canvas is defined here.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Palette used by the default control look
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(70, 70, 70);
    pub const SILVER: Self = Self::rgb(150, 150, 150);
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);
    pub const GAINSBORO: Self = Self::rgb(220, 220, 220);
    pub const DODGER_BLUE: Self = Self::rgb(30, 144, 255);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha blend src over dst (Porter-Duff "over" operation).
    #[inline]
    pub fn blend(src: Self, dst: Self) -> Self {
        // Fast path: fully opaque source
        if src.is_opaque() {
            return src;
        }

        // Fast path: fully transparent source
        if src.is_transparent() {
            return dst;
        }

        let sa = src.a as i32;
        let da = dst.a as i32;
        let inv_sa = 255 - sa;

        // out_a = src_a + dst_a * (1 - src_a)
        let out_a = sa + (da * inv_sa) / 255;

        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        // out_rgb = (src_rgb * src_a + dst_rgb * dst_a * (1 - src_a)) / out_a
        let channel = |s: u8, d: u8| -> u8 {
            (((s as i32 * sa) + (d as i32 * da * inv_sa / 255)) / out_a).clamp(0, 255) as u8
        };

        Self {
            r: channel(src.r, dst.r),
            g: channel(src.g, dst.g),
            b: channel(src.b, dst.b),
            a: out_a.clamp(0, 255) as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A point in surface coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by another point.
    pub const fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height. Negative inputs are clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w: w.max(0), h: h.max(0) }
    }

    /// True if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w: w.max(0), h: h.max(0) }
    }

    /// Rectangle from a position and a size.
    pub fn from_parts(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.w, size.h)
    }

    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Half-open containment test: the right and bottom edges are outside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Intersection of two rectangles, `None` if they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, w, h)
    }
}

// =============================================================================
// Pointer Buttons
// =============================================================================

bitflags! {
    /// Pressed pointer buttons. The bit values are the weights reported by
    /// `is_down`: left=1, right=2, middle=4.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct MouseButtons: u8 {
        const LEFT = 1;
        const RIGHT = 2;
        const MIDDLE = 4;
    }
}

/// A single pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

impl MouseButton {
    /// The bitmask bit for this button (empty for `None`).
    pub fn bit(self) -> MouseButtons {
        match self {
            Self::Left => MouseButtons::LEFT,
            Self::Right => MouseButtons::RIGHT,
            Self::Middle => MouseButtons::MIDDLE,
            Self::None => MouseButtons::empty(),
        }
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Placement of rendered content (text, images) inside a control's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Align {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// User supplied offset from the box's top-left corner.
    Manual(i32, i32),
}

impl Align {
    /// Offset of `content` inside `container` for this alignment.
    ///
    /// Edge alignments center on the other axis; corners pin both axes.
    /// Content larger than the box yields negative offsets (overflow is
    /// clipped by the surface, not prevented here).
    pub fn offset(self, container: Size, content: Size) -> Point {
        let left = 0;
        let right = container.w - content.w;
        let center_x = (container.w - content.w) / 2;
        let top = 0;
        let bottom = container.h - content.h;
        let center_y = (container.h - content.h) / 2;

        match self {
            Self::Left => Point::new(left, center_y),
            Self::Right => Point::new(right, center_y),
            Self::Top => Point::new(center_x, top),
            Self::Bottom => Point::new(center_x, bottom),
            Self::Center => Point::new(center_x, center_y),
            Self::TopLeft => Point::new(left, top),
            Self::TopRight => Point::new(right, top),
            Self::BottomLeft => Point::new(left, bottom),
            Self::BottomRight => Point::new(right, bottom),
            Self::Manual(x, y) => Point::new(x, y),
        }
    }
}

// =============================================================================
// Font Sizes
// =============================================================================

/// Named font size presets (pixel heights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontSize {
    #[default]
    Default,
    Small,
    Medium,
    Large,
    Scanner,
}

impl FontSize {
    /// Pixel height of the preset.
    pub const fn px(self) -> i32 {
        match self {
            Self::Default => 20,
            Self::Small => 15,
            Self::Medium => 40,
            Self::Large => 60,
            Self::Scanner => 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(10, 15)));
        assert!(!r.contains(Point::new(9, 12)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn test_blend() {
        let dst = Rgba::WHITE;
        assert_eq!(Rgba::blend(Rgba::BLACK, dst), Rgba::BLACK);
        assert_eq!(Rgba::blend(Rgba::TRANSPARENT, dst), dst);

        let half = Rgba::blend(Rgba::BLACK.with_alpha(128), dst);
        assert_eq!(half.a, 255);
        assert!(half.r > 100 && half.r < 140);
    }

    #[test]
    fn test_mouse_button_weights() {
        assert_eq!(MouseButtons::LEFT.bits(), 1);
        assert_eq!(MouseButtons::RIGHT.bits(), 2);
        assert_eq!(MouseButtons::MIDDLE.bits(), 4);
        assert_eq!((MouseButtons::LEFT | MouseButtons::RIGHT).bits(), 3);
        assert_eq!(MouseButton::None.bit(), MouseButtons::empty());
    }

    #[test]
    fn test_align_offsets() {
        let boxed = Size::new(100, 30);
        let content = Size::new(40, 10);
        assert_eq!(Align::Center.offset(boxed, content), Point::new(30, 10));
        assert_eq!(Align::Left.offset(boxed, content), Point::new(0, 10));
        assert_eq!(Align::Right.offset(boxed, content), Point::new(60, 10));
        assert_eq!(Align::Top.offset(boxed, content), Point::new(30, 0));
        assert_eq!(Align::Bottom.offset(boxed, content), Point::new(30, 20));
        assert_eq!(Align::TopLeft.offset(boxed, content), Point::new(0, 0));
        assert_eq!(Align::BottomRight.offset(boxed, content), Point::new(60, 20));
        assert_eq!(Align::Manual(3, 4).offset(boxed, content), Point::new(3, 4));
    }

    #[test]
    fn test_font_size_presets() {
        assert_eq!(FontSize::Default.px(), 20);
        assert_eq!(FontSize::Small.px(), 15);
        assert_eq!(FontSize::Medium.px(), 40);
        assert_eq!(FontSize::Large.px(), 60);
        assert_eq!(FontSize::Scanner.px(), 30);
    }
}
