//! Push button: a caption plus an action fired on click.

use crate::font::Font;
use crate::layer::LayerSet;
use crate::types::{Align, Size};

/// Button behavior.
pub struct Button {
    pub caption: String,
    pub align: Align,
    action: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            align: Align::Center,
            action: None,
        }
    }

    /// Set the action run on every primary-button hit.
    pub fn on_click(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn set_action(&mut self, action: impl FnMut() + 'static) {
        self.action = Some(Box::new(action));
    }

    /// Run the action, if any.
    pub fn activate(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }

    pub(crate) fn paint(&self, midground: &mut LayerSet, size: Size, font: &dyn Font) {
        if self.caption.is_empty() {
            return;
        }
        let text = font.render(&self.caption, true);
        let at = self.align.offset(size, font.measure(&self.caption));
        midground.for_each_mut(|_, surface| surface.blit_from(&text, at));
    }
}
