//! Layer sets and borders.
//!
//! Every control is drawn as three planes (background, midground,
//! foreground). Each plane is a [`LayerSet`]: one pre-rendered surface per
//! [`VisualState`], rebuilt wholesale on `update()`.

use crate::surface::Surface;
use crate::types::{Point, Rect, Rgba, Size};

// =============================================================================
// VISUAL STATE
// =============================================================================

/// The four mutually exclusive ways a control can look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Normal,
    Hover,
    Down,
    Disabled,
}

impl VisualState {
    pub const ALL: [VisualState; 4] = [Self::Normal, Self::Hover, Self::Down, Self::Disabled];

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Hover => 1,
            Self::Down => 2,
            Self::Disabled => 3,
        }
    }
}

// =============================================================================
// LAYER SET
// =============================================================================

/// Four surfaces (one per visual state) plus what they are filled with
/// when rebuilt: a color, and optionally an image drawn over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSet {
    colors: [Rgba; 4],
    images: [Option<Surface>; 4],
    surfaces: [Option<Surface>; 4],
}

impl Default for LayerSet {
    fn default() -> Self {
        Self::with_colors(Rgba::SILVER, Rgba::GAINSBORO, Rgba::WHITE, Rgba::GRAY)
    }
}

impl LayerSet {
    /// Layer set with explicit fill colors and no surfaces yet.
    pub fn with_colors(normal: Rgba, hover: Rgba, down: Rgba, disabled: Rgba) -> Self {
        Self {
            colors: [normal, hover, down, disabled],
            images: [None, None, None, None],
            surfaces: [None, None, None, None],
        }
    }

    /// Fill color for a state.
    pub fn color(&self, state: VisualState) -> Rgba {
        self.colors[state.slot()]
    }

    pub fn set_color(&mut self, state: VisualState, color: Rgba) {
        self.colors[state.slot()] = color;
    }

    /// Use one color for every state.
    pub fn set_all_colors(&mut self, color: Rgba) {
        self.colors = [color; 4];
    }

    /// Image drawn over the fill color of a state, if any.
    pub fn image(&self, state: VisualState) -> Option<&Surface> {
        self.images[state.slot()].as_ref()
    }

    /// Picture for one state, stretched to the layer size on rebuild.
    /// `None` goes back to a plain color fill.
    pub fn set_image(&mut self, state: VisualState, image: Option<Surface>) {
        self.images[state.slot()] = image;
    }

    /// Make hover and down look like normal.
    pub fn flatten(&mut self) {
        let normal = VisualState::Normal.slot();
        for state in [VisualState::Hover, VisualState::Down] {
            self.colors[state.slot()] = self.colors[normal];
            self.images[state.slot()] = self.images[normal].clone();
        }
    }

    /// Rendered surface for a state (`None` before the first rebuild).
    pub fn surface(&self, state: VisualState) -> Option<&Surface> {
        self.surfaces[state.slot()].as_ref()
    }

    pub fn surface_mut(&mut self, state: VisualState) -> Option<&mut Surface> {
        self.surfaces[state.slot()].as_mut()
    }

    /// True once every state has a surface.
    pub fn is_built(&self) -> bool {
        self.surfaces.iter().all(Option::is_some)
    }

    /// Reallocate all four surfaces at `size`, each filled with its state
    /// color and then its image, if it has one.
    pub fn rebuild_filled(&mut self, size: Size) {
        for state in VisualState::ALL {
            let slot = state.slot();
            let mut surface = Surface::filled(size, self.colors[slot]);
            match &self.images[slot] {
                Some(image) if image.bounds().size() == size => {
                    surface.blit_from(image, Point::new(0, 0))
                }
                Some(image) => surface.blit_from(&image.scaled(size), Point::new(0, 0)),
                None => {}
            }
            self.surfaces[slot] = Some(surface);
        }
    }

    /// Reallocate all four surfaces at `size`, fully transparent.
    pub fn rebuild_clear(&mut self, size: Size) {
        for slot in &mut self.surfaces {
            *slot = Some(Surface::new(size));
        }
    }

    /// Run `f` on every built surface together with its state.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(VisualState, &mut Surface)) {
        for state in VisualState::ALL {
            if let Some(surface) = self.surfaces[state.slot()].as_mut() {
                f(state, surface);
            }
        }
    }
}

// =============================================================================
// BORDER
// =============================================================================

/// Stroke style of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    /// Alternating dashes, each `width` pixels long.
    Dotted,
}

/// Outline drawn around a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: Rgba,
    pub width: i32,
    pub style: BorderStyle,
    pub show: bool,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: Rgba::BLUE,
            width: 3,
            style: BorderStyle::Solid,
            show: true,
        }
    }
}

impl Border {
    pub fn new(color: Rgba, width: i32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// A border that draws nothing.
    pub fn hidden() -> Self {
        Self {
            show: false,
            ..Self::default()
        }
    }

    /// Stroke `rect` on `surface`. Does nothing when `show` is false.
    pub fn stroke(&self, surface: &mut Surface, rect: Rect) {
        if !self.show {
            return;
        }
        match self.style {
            BorderStyle::Solid => surface.stroke_rect(rect, self.color, self.width),
            BorderStyle::Dotted => self.stroke_dotted(surface, rect),
        }
    }

    /// Stroke the whole surface.
    pub fn stroke_all(&self, surface: &mut Surface) {
        let bounds = surface.bounds();
        self.stroke(surface, bounds);
    }

    fn stroke_dotted(&self, surface: &mut Surface, rect: Rect) {
        let w = self.width.max(1);
        let dash = |i: i32| (i / w) % 2 == 0;

        for x in (rect.x..rect.right()).step_by(w as usize) {
            if dash(x - rect.x) {
                surface.paint_rect(Rect::new(x, rect.y, w, w), self.color);
                surface.paint_rect(Rect::new(x, rect.bottom() - w, w, w), self.color);
            }
        }
        for y in (rect.y..rect.bottom()).step_by(w as usize) {
            if dash(y - rect.y) {
                surface.paint_rect(Rect::new(rect.x, y, w, w), self.color);
                surface.paint_rect(Rect::new(rect.right() - w, y, w, w), self.color);
            }
        }
    }
}
