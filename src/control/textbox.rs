//! Single-line editable text.
//!
//! The cursor is a character index in `0..=len`. Editing keys:
//!
//! | Key                  | Effect                                  |
//! |----------------------|-----------------------------------------|
//! | printable char       | insert at cursor                        |
//! | Backspace / Delete   | remove before / after cursor            |
//! | ArrowLeft/Right      | move one char (ctrl: one word)          |
//! | Home / End           | jump to start / end                     |
//!
//! The caret blinks while focused. Its phase is per instance and advances
//! by the frame delta handed to `render`, so two boxes never share timing
//! and tests can step it explicitly.

use std::time::Duration;

use crate::canvas::Canvas;
use crate::control::{FocusDirection, FocusExits};
use crate::font::Font;
use crate::input::KeyboardEvent;
use crate::layer::LayerSet;
use crate::types::{Align, Point, Size};

const DEFAULT_BLINK: Duration = Duration::from_millis(300);

// =============================================================================
// Word Navigation Helpers
// =============================================================================

/// Start of the word before `pos` (skips whitespace first).
fn find_word_start(chars: &[char], pos: usize) -> usize {
    let mut i = pos.min(chars.len());
    while i > 0 && chars[i - 1].is_whitespace() {
        i -= 1;
    }
    while i > 0 && !chars[i - 1].is_whitespace() {
        i -= 1;
    }
    i
}

/// End of the word after `pos` (skips whitespace first).
fn find_word_end(chars: &[char], pos: usize) -> usize {
    let mut i = pos.min(chars.len());
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    while i < chars.len() && !chars[i].is_whitespace() {
        i += 1;
    }
    i
}

// =============================================================================
// TextBox
// =============================================================================

/// TextBox behavior.
pub struct TextBox {
    text: String,
    pub align: Align,
    cursor: usize,
    /// Walk the cursor to the text edge before letting Tab move focus on.
    pub cursor_traversal: bool,
    blink_period: Duration,
    blink_elapsed: Duration,
    caret_visible: bool,
    on_change: Option<Box<dyn Fn(&str)>>,
}

impl TextBox {
    /// Text box with the cursor placed after the last character.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            align: Align::Left,
            cursor,
            cursor_traversal: false,
            blink_period: DEFAULT_BLINK,
            blink_elapsed: Duration::ZERO,
            caret_visible: true,
            on_change: None,
        }
    }

    /// Callback run with the new text after every edit.
    pub fn on_change(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. The cursor is clamped to the new length.
    /// Does not fire `on_change`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.cursor.min(self.len());
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    pub fn blink_period(&self) -> Duration {
        self.blink_period
    }

    pub fn set_blink_period(&mut self, period: Duration) {
        self.blink_period = period;
    }

    /// Whether the caret is in its visible phase.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn prefix(&self, chars: usize) -> &str {
        match self.text.char_indices().nth(chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Apply an editing key. Returns true if it was consumed.
    pub(crate) fn keydown(&mut self, event: &KeyboardEvent) -> bool {
        let mut chars: Vec<char> = self.text.chars().collect();
        let pos = self.cursor.min(chars.len());
        let mut edited = false;

        let consumed = if let Some(c) = event.printable() {
            chars.insert(pos, c);
            self.cursor = pos + 1;
            edited = true;
            true
        } else {
            match event.key.as_str() {
                "Backspace" => {
                    if pos > 0 {
                        chars.remove(pos - 1);
                        self.cursor = pos - 1;
                        edited = true;
                    }
                    true
                }
                "Delete" => {
                    if pos < chars.len() {
                        chars.remove(pos);
                        edited = true;
                    }
                    true
                }
                "ArrowLeft" if event.modifiers.ctrl => {
                    self.cursor = find_word_start(&chars, pos);
                    true
                }
                "ArrowRight" if event.modifiers.ctrl => {
                    self.cursor = find_word_end(&chars, pos);
                    true
                }
                "ArrowLeft" => {
                    self.cursor = pos.saturating_sub(1);
                    true
                }
                "ArrowRight" => {
                    self.cursor = (pos + 1).min(chars.len());
                    true
                }
                "Home" => {
                    self.cursor = 0;
                    true
                }
                "End" => {
                    self.cursor = chars.len();
                    true
                }
                _ => false,
            }
        };

        if edited {
            self.text = chars.into_iter().collect();
            if let Some(ref cb) = self.on_change {
                cb(&self.text);
            }
        }
        if consumed {
            self.reset_blink();
        }
        consumed
    }

    // -------------------------------------------------------------------------
    // Focus negotiation
    // -------------------------------------------------------------------------

    pub(crate) fn focus_exits(&self) -> FocusExits {
        if !self.cursor_traversal {
            return FocusExits::all();
        }
        let mut exits = FocusExits::empty();
        if self.cursor == 0 {
            exits |= FocusExits::PREV;
        }
        if self.cursor >= self.len() {
            exits |= FocusExits::NEXT;
        }
        exits
    }

    pub(crate) fn change_focus(&mut self, dir: FocusDirection) -> bool {
        if self.focus_exits().contains(dir.into()) {
            return true;
        }
        match dir {
            FocusDirection::Prev => self.cursor -= 1,
            FocusDirection::Next => self.cursor += 1,
        }
        self.reset_blink();
        false
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Top-left of the rendered text inside a box of `size`.
    pub fn text_origin(&self, size: Size, font: &dyn Font) -> Point {
        self.align.offset(size, font.measure(&self.text))
    }

    /// Caret x offset inside a box of `size`.
    pub fn caret_x(&self, size: Size, font: &dyn Font) -> i32 {
        self.text_origin(size, font).x + font.measure(self.prefix(self.cursor)).w
    }

    /// Move the cursor to the character boundary nearest `local_x`.
    pub(crate) fn click_at(&mut self, local_x: i32, size: Size, font: &dyn Font) {
        let origin = self.text_origin(size, font).x;
        let mut best = (0, i32::MAX);
        for i in 0..=self.len() {
            let distance = (origin + font.measure(self.prefix(i)).w - local_x).abs();
            if distance < best.1 {
                best = (i, distance);
            }
        }
        self.cursor = best.0;
        self.reset_blink();
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub(crate) fn paint(&self, midground: &mut LayerSet, size: Size, font: &dyn Font) {
        if self.text.is_empty() {
            return;
        }
        let text = font.render(&self.text, true);
        let at = self.text_origin(size, font);
        midground.for_each_mut(|_, surface| surface.blit_from(&text, at));
    }

    fn reset_blink(&mut self) {
        self.blink_elapsed = Duration::ZERO;
        self.caret_visible = true;
    }

    /// Step the blink phase by `dt`. Unfocused boxes park in the visible
    /// phase so the caret shows immediately on focus.
    pub(crate) fn advance_blink(&mut self, focused: bool, dt: Duration) {
        if !focused || self.blink_period.is_zero() {
            self.reset_blink();
            return;
        }
        self.blink_elapsed += dt;
        while self.blink_elapsed >= self.blink_period {
            self.blink_elapsed -= self.blink_period;
            self.caret_visible = !self.caret_visible;
        }
    }

    pub(crate) fn render_caret(&self, canvas: &mut dyn Canvas, pos: Point, size: Size, font: &dyn Font) {
        if !self.caret_visible {
            return;
        }
        let x = pos.x + self.caret_x(size, font);
        let top = pos.y + self.text_origin(size, font).y;
        let bottom = top + font.px() - 1;
        canvas.draw_line(font.color(), Point::new(x, top), Point::new(x, bottom), 1);
    }
}
