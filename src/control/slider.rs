//! Vertical slider.
//!
//! The cursor is a horizontal bar riding a central vertical line: `max` at
//! the top, `min` at the bottom. Hit zones, tested in this order:
//!
//! ```text
//! Miss        outside the box
//! Cursor      the cursor bar            starts a drag
//! CenterLine  the line under the bar    centers the bar on the pointer
//! Track       anywhere else in the box  focus only
//! ```
//!
//! A cursor bar taller than the box only counts where it overlaps the box.
//!
//! A drag ends by itself on the first render that sees no pointer button
//! held.

use tracing::debug;

use crate::canvas::{Canvas, PointerState};
use crate::layer::{LayerSet, VisualState};
use crate::types::{Point, Rect, Rgba, Size};

/// Hit zone codes reported by `Control::is_hover` for sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SliderZone {
    Miss = 0,
    Cursor = 1,
    CenterLine = 2,
    Track = 3,
}

impl SliderZone {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Cursor,
            2 => Self::CenterLine,
            3 => Self::Track,
            _ => Self::Miss,
        }
    }
}

/// SliderV behavior.
pub struct SliderV {
    min: f64,
    max: f64,
    value: f64,
    /// Height of the cursor bar.
    pub cursor_thickness: i32,
    /// Width of the central line.
    pub line_width: i32,
    pub line_color: Rgba,
    /// Cursor bar looks, one per visual state.
    pub cursor: LayerSet,
    /// Pointer distance below the cursor's top edge while dragging.
    grab: Option<i32>,
}

impl Default for SliderV {
    fn default() -> Self {
        Self::new(0.0, 100.0, 50.0)
    }
}

impl SliderV {
    /// Slider over `[min, max]` (swapped if given reversed), with `value`
    /// clamped into range.
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut slider = Self {
            min,
            max,
            value: min,
            cursor_thickness: 5,
            line_width: 3,
            line_color: Rgba::BLACK,
            cursor: LayerSet::with_colors(Rgba::GRAY, Rgba::SILVER, Rgba::BLACK, Rgba::LIGHT_GRAY),
            grab: None,
        };
        slider.set_value(value);
        slider
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped to `[min, max]`.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
    }

    /// Lowers `max` too if it would end up below `min`.
    pub fn set_min(&mut self, min: f64) {
        self.min = min;
        if self.max < min {
            self.max = min;
        }
        self.set_value(self.value);
    }

    /// Raises `min` too if it would end up above `max`.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
        if self.min > max {
            self.min = max;
        }
        self.set_value(self.value);
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.set_value(self.value);
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Cursor bar offset from the control's top-left. Moves up as the
    /// value grows.
    pub fn cursor_offset(&self, size: Size) -> Point {
        let travel = (size.h - self.cursor_thickness).max(0);
        let span = self.max - self.min;
        let fraction = if span > 0.0 { (self.value - self.min) / span } else { 0.0 };
        Point::new(0, travel - (travel as f64 * fraction).round() as i32)
    }

    /// Value that puts the cursor's top edge `cursor_top` pixels below the
    /// control's top. Inverse of [`cursor_offset`](Self::cursor_offset);
    /// not clamped.
    pub fn value_at(&self, cursor_top: i32, size: Size) -> f64 {
        let travel = size.h - self.cursor_thickness;
        if travel <= 0 {
            return self.min;
        }
        self.min + (travel - cursor_top) as f64 * (self.max - self.min) / travel as f64
    }

    fn cursor_rect(&self, rect: Rect) -> Rect {
        let offset = self.cursor_offset(rect.size());
        Rect::new(rect.x, rect.y + offset.y, rect.w, self.cursor_thickness)
    }

    pub(crate) fn zone(&self, rect: Rect, pointer: &PointerState) -> SliderZone {
        if !pointer.collides(rect) {
            return SliderZone::Miss;
        }
        if pointer.collides(self.cursor_rect(rect)) {
            return SliderZone::Cursor;
        }
        let center = rect.x + rect.w / 2;
        if (pointer.pos.x - center).abs() <= self.line_width / 2 {
            SliderZone::CenterLine
        } else {
            SliderZone::Track
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    pub(crate) fn press(&mut self, hit: u8, rect: Rect, pointer: &PointerState) {
        let local_y = pointer.pos.y - rect.y;
        match SliderZone::from_code(hit) {
            SliderZone::Cursor => {
                self.grab = Some(local_y - self.cursor_offset(rect.size()).y);
                debug!(value = self.value, "slider drag started");
            }
            SliderZone::CenterLine => {
                // center the bar on the pointer
                let top = local_y - self.cursor_thickness / 2;
                self.set_value(self.value_at(top, rect.size()));
            }
            SliderZone::Track | SliderZone::Miss => {}
        }
    }

    /// Follow the pointer while dragging; stop once no button is held.
    pub(crate) fn track_drag(&mut self, rect: Rect, enable: bool, pointer: &PointerState) {
        let Some(grab) = self.grab else {
            return;
        };
        if !pointer.any_pressed() {
            self.grab = None;
            debug!(value = self.value, "slider drag ended");
            return;
        }
        if enable {
            let top = pointer.pos.y - rect.y - grab;
            self.set_value(self.value_at(top, rect.size()));
        }
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub(crate) fn paint(&self, midground: &mut LayerSet, size: Size) {
        let x = size.w / 2;
        let (color, width) = (self.line_color, self.line_width);
        midground.for_each_mut(|_, surface| {
            surface.line(Point::new(x, 0), Point::new(x, size.h - 1), color, width);
        });
    }

    pub(crate) fn rebuild_cursor(&mut self, size: Size) {
        self.cursor.rebuild_filled(Size::new(size.w, self.cursor_thickness));
    }

    pub(crate) fn render_cursor(&self, canvas: &mut dyn Canvas, rect: Rect, state: VisualState) {
        let Some(surface) = self.cursor.surface(state) else {
            return;
        };
        canvas.blit(surface, rect.pos().offset(self.cursor_offset(rect.size())));
    }
}
