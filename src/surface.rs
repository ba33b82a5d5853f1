//! Surface and drawing primitives.
//!
//! A `Surface` is a 2D grid of RGBA pixels. Controls pre-render their layer
//! sets into surfaces and blit them onto a [`Canvas`] every frame; the
//! surface itself is also a canvas, so a whole screen can be composited
//! off-screen.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Rgba>` with row-major indexing for cache efficiency.
//! - **Clipping**: every primitive clips to the surface bounds.
//! - **Alpha blending**: `blit` blends with existing pixels; `fill` replaces.

use crate::canvas::Canvas;
use crate::types::{Point, Rect, Rgba, Size};

// =============================================================================
// Surface
// =============================================================================

/// A 2D buffer of pixels.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Create a new fully transparent surface.
    pub fn new(size: Size) -> Self {
        Self::filled(size, Rgba::TRANSPARENT)
    }

    /// Create a new surface filled with one color.
    pub fn filled(size: Size, color: Rgba) -> Self {
        let len = size.w as usize * size.h as usize;
        Self {
            width: size.w,
            height: size.h,
            pixels: vec![color; len],
        }
    }

    /// Build a surface from raw row-major pixels.
    ///
    /// Returns `None` if the pixel count does not match the size.
    pub fn from_pixels(size: Size, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != size.w as usize * size.h as usize {
            return None;
        }
        Some(Self {
            width: size.w,
            height: size.h,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Full bounds as a rectangle at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Get a pixel (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Raw pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Replace a pixel. Returns true if it was inside the surface.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        true
    }

    /// Blend a pixel over the existing one.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = Rgba::blend(color, self.pixels[idx]);
        }
    }

    /// Replace every pixel inside `rect` (clipped) with `color`.
    pub fn paint_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(clipped) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            let start = self.index(clipped.x, y);
            self.pixels[start..start + clipped.w as usize].fill(color);
        }
    }

    /// Stroke a rectangle outline `width` pixels thick, drawn inward from
    /// the rectangle's edges. A width of 0, or one that covers the whole
    /// rectangle, fills it.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: i32) {
        if width <= 0 || width * 2 >= rect.w.min(rect.h) {
            self.paint_rect(rect, color);
            return;
        }
        // top, bottom, left, right bands
        self.paint_rect(Rect::new(rect.x, rect.y, rect.w, width), color);
        self.paint_rect(Rect::new(rect.x, rect.bottom() - width, rect.w, width), color);
        self.paint_rect(Rect::new(rect.x, rect.y + width, width, rect.h - 2 * width), color);
        self.paint_rect(
            Rect::new(rect.right() - width, rect.y + width, width, rect.h - 2 * width),
            color,
        );
    }

    /// Bresenham line stamped with a `width`-sided square brush.
    pub fn line(&mut self, from: Point, to: Point, color: Rgba, width: i32) {
        let width = width.max(1);
        let half = (width - 1) / 2;

        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.paint_rect(Rect::new(x - half, y - half, width, width), color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Alpha-blend `src` onto this surface with its top-left at `at`.
    pub fn blit_from(&mut self, src: &Surface, at: Point) {
        let target = Rect::new(at.x, at.y, src.width, src.height);
        let Some(clipped) = target.intersect(&self.bounds()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                let color = src.pixels[src.index(x - at.x, y - at.y)];
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Nearest-neighbour rescale to `size`.
    pub fn scaled(&self, size: Size) -> Surface {
        let mut out = Surface::new(size);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..size.h {
            let sy = (y as i64 * self.height as i64 / size.h as i64) as i32;
            for x in 0..size.w {
                let sx = (x as i64 * self.width as i64 / size.w as i64) as i32;
                let idx = out.index(x, y);
                out.pixels[idx] = self.pixels[self.index(sx, sy)];
            }
        }
        out
    }
}

impl Canvas for Surface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, color: Rgba, rect: Rect) {
        self.paint_rect(rect, color);
    }

    fn draw_rect(&mut self, color: Rgba, rect: Rect, width: i32) {
        self.stroke_rect(rect, color, width);
    }

    fn draw_line(&mut self, color: Rgba, from: Point, to: Point, width: i32) {
        self.line(from, to, color, width);
    }

    fn blit(&mut self, surface: &Surface, at: Point) {
        self.blit_from(surface, at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let s = Surface::new(Size::new(4, 3));
        assert_eq!(s.width(), 4);
        assert_eq!(s.height(), 3);
        assert!(s.pixels().iter().all(|p| p.is_transparent()));
        assert_eq!(s.get(4, 0), None);
    }

    #[test]
    fn test_stroke_rect_leaves_inside_untouched() {
        let mut s = Surface::new(Size::new(10, 10));
        s.stroke_rect(s.bounds(), Rgba::BLUE, 2);
        assert_eq!(s.get(0, 0), Some(Rgba::BLUE));
        assert_eq!(s.get(1, 5), Some(Rgba::BLUE));
        assert_eq!(s.get(9, 9), Some(Rgba::BLUE));
        assert_eq!(s.get(8, 5), Some(Rgba::BLUE));
        assert_eq!(s.get(2, 2), Some(Rgba::TRANSPARENT));
        assert_eq!(s.get(5, 5), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_stroke_rect_zero_width_fills() {
        let mut s = Surface::new(Size::new(6, 6));
        s.stroke_rect(Rect::new(1, 1, 4, 4), Rgba::RED, 0);
        assert_eq!(s.get(3, 3), Some(Rgba::RED));
        assert_eq!(s.get(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_vertical_line_with_width() {
        let mut s = Surface::new(Size::new(9, 5));
        s.line(Point::new(4, 0), Point::new(4, 4), Rgba::BLACK, 3);
        for y in 0..5 {
            assert_eq!(s.get(3, y), Some(Rgba::BLACK));
            assert_eq!(s.get(4, y), Some(Rgba::BLACK));
            assert_eq!(s.get(5, y), Some(Rgba::BLACK));
            assert_eq!(s.get(2, y), Some(Rgba::TRANSPARENT));
            assert_eq!(s.get(6, y), Some(Rgba::TRANSPARENT));
        }
    }

    #[test]
    fn test_blit_clips_and_blends() {
        let mut dst = Surface::filled(Size::new(4, 4), Rgba::WHITE);
        let mut src = Surface::filled(Size::new(3, 3), Rgba::RED);
        src.set(0, 0, Rgba::TRANSPARENT);

        dst.blit_from(&src, Point::new(2, 2));
        assert_eq!(dst.get(2, 2), Some(Rgba::WHITE));
        assert_eq!(dst.get(3, 3), Some(Rgba::RED));
        assert_eq!(dst.get(1, 1), Some(Rgba::WHITE));

        // Fully outside: no panic, no change
        dst.blit_from(&src, Point::new(-10, -10));
        assert_eq!(dst.get(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_scaled() {
        let mut s = Surface::new(Size::new(2, 2));
        s.set(1, 1, Rgba::RED);
        let big = s.scaled(Size::new(4, 4));
        assert_eq!(big.get(3, 3), Some(Rgba::RED));
        assert_eq!(big.get(2, 2), Some(Rgba::RED));
        assert_eq!(big.get(1, 1), Some(Rgba::TRANSPARENT));
    }
}
