//! Static text.

use crate::font::Font;
use crate::layer::LayerSet;
use crate::types::{Align, Size};

/// Label behavior. Inert: never focusable by default and has no
/// interactive looks.
pub struct Label {
    pub text: String,
    pub align: Align,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub(crate) fn paint(&self, midground: &mut LayerSet, size: Size, font: &dyn Font) {
        if self.text.is_empty() {
            return;
        }
        let text = font.render(&self.text, true);
        let at = self.align.offset(size, font.measure(&self.text));
        midground.for_each_mut(|_, surface| surface.blit_from(&text, at));
    }
}
