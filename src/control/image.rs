//! Picture box.
//!
//! Decoding image files is the caller's job; this control displays an
//! already-decoded [`Surface`].

use crate::layer::LayerSet;
use crate::surface::Surface;
use crate::types::{Align, Size};

/// Image behavior.
pub struct Image {
    image: Option<Surface>,
    pub align: Align,
}

impl Image {
    pub fn new(image: Surface) -> Self {
        Self {
            image: Some(image),
            align: Align::Center,
        }
    }

    /// Image control with nothing loaded yet.
    pub fn empty() -> Self {
        Self {
            image: None,
            align: Align::Center,
        }
    }

    pub fn image(&self) -> Option<&Surface> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<Surface>) {
        self.image = image;
    }

    /// Rescale the loaded image to `size`. The control keeps its size.
    pub(crate) fn fit(&mut self, size: Size) -> bool {
        match self.image.as_mut() {
            Some(image) => {
                *image = image.scaled(size);
                true
            }
            None => false,
        }
    }

    pub(crate) fn paint(&self, midground: &mut LayerSet, size: Size) {
        let Some(image) = &self.image else {
            return;
        };
        let at = self.align.offset(size, Size::new(image.width(), image.height()));
        midground.for_each_mut(|_, surface| surface.blit_from(image, at));
    }
}
