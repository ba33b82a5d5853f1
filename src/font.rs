//! Font Module - Text measurement and rendering
//!
//! Controls only need two things from a font: how big a string is, and a
//! surface with the string drawn on it. [`Font`] is that seam; glyph
//! rasterization lives behind it.
//!
//! [`MonoFont`] is the built-in implementation: a fixed-advance block font
//! where every visible glyph is a filled cell. Cell widths follow Unicode
//! display width (CJK and most emoji take two cells).

use unicode_width::UnicodeWidthChar;

use crate::surface::Surface;
use crate::types::{FontSize, Rect, Rgba, Size};

// =============================================================================
// FONT TRAIT
// =============================================================================

/// Text measurement and rendering.
pub trait Font {
    /// Pixel height of a line.
    fn px(&self) -> i32;

    /// Color text is rendered in.
    fn color(&self) -> Rgba;

    /// Size of `text` when rendered on one line.
    fn measure(&self, text: &str) -> Size;

    /// A transparent surface of `measure(text)` with the text drawn on it.
    fn render(&self, text: &str, antialias: bool) -> Surface;
}

// =============================================================================
// MONO FONT
// =============================================================================

/// Fixed-advance block font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoFont {
    px: i32,
    color: Rgba,
}

impl Default for MonoFont {
    fn default() -> Self {
        Self::new(FontSize::Default, Rgba::BLACK)
    }
}

impl MonoFont {
    pub fn new(size: FontSize, color: Rgba) -> Self {
        Self::with_px(size.px(), color)
    }

    /// Font with an arbitrary pixel height.
    pub fn with_px(px: i32, color: Rgba) -> Self {
        Self { px: px.max(1), color }
    }

    /// Horizontal advance of one display cell.
    pub fn advance(&self) -> i32 {
        (self.px / 2).max(1)
    }

    fn cells(c: char) -> i32 {
        c.width().unwrap_or(0) as i32
    }
}

impl Font for MonoFont {
    fn px(&self) -> i32 {
        self.px
    }

    fn color(&self) -> Rgba {
        self.color
    }

    fn measure(&self, text: &str) -> Size {
        let cells: i32 = text.chars().map(Self::cells).sum();
        Size::new(cells * self.advance(), self.px)
    }

    fn render(&self, text: &str, _antialias: bool) -> Surface {
        let mut surface = Surface::new(self.measure(text));
        let inset = (self.px / 10).max(1);
        let mut x = 0;

        for c in text.chars() {
            let w = Self::cells(c) * self.advance();
            if w > 0 && !c.is_whitespace() {
                surface.paint_rect(
                    Rect::new(x + inset, inset, w - 2 * inset, self.px - 2 * inset),
                    self.color,
                );
            }
            x += w;
        }

        surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_ascii() {
        let font = MonoFont::default();
        assert_eq!(font.advance(), 10);
        assert_eq!(font.measure("abcde"), Size::new(50, 20));
        assert_eq!(font.measure(""), Size::new(0, 20));
    }

    #[test]
    fn test_measure_wide_chars() {
        let font = MonoFont::new(FontSize::Small, Rgba::BLACK);
        // 15px / 2 = 7px advance, CJK takes two cells
        assert_eq!(font.measure("日本").w, 28);
    }

    #[test]
    fn test_render_draws_glyph_cells_only() {
        let font = MonoFont::with_px(10, Rgba::RED);
        let s = font.render("a b", true);
        assert_eq!(s.width(), 15);
        assert_eq!(s.height(), 10);
        // inside first glyph
        assert_eq!(s.get(2, 5), Some(Rgba::RED));
        // the space stays transparent
        assert_eq!(s.get(7, 5), Some(Rgba::TRANSPARENT));
        // inside third glyph
        assert_eq!(s.get(12, 5), Some(Rgba::RED));
    }
}
