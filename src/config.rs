//! Configuration for a [`Ui`](crate::ui::Ui) context.

use std::time::Duration;

use crate::layer::Border;
use crate::types::{FontSize, Rgba, Size};

/// Where control names must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameScope {
    /// Unique among the controls of one screen (checked when attaching).
    #[default]
    PerScreen,
    /// Unique among every control ever created in the context.
    Global,
}

/// Settings shared by every screen and control created in a context.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub name_scope: NameScope,
    /// Half-period of the text caret blink.
    pub blink_period: Duration,
    /// Size of the font new controls are created with.
    pub font_size: FontSize,
    pub font_color: Rgba,
    /// Outline drawn around the focused control of each new screen.
    pub focus_border: Border,
    /// Fill color of each new screen.
    pub screen_background: Rgba,
    /// Pixel size of one terminal cell, used to place terminal mouse
    /// reports. Defaults to one glyph of the default font.
    pub cell_size: Size,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            name_scope: NameScope::PerScreen,
            blink_period: Duration::from_millis(300),
            font_size: FontSize::Default,
            font_color: Rgba::BLACK,
            focus_border: Border::new(Rgba::DODGER_BLUE, 2),
            screen_background: Rgba::WHITE,
            cell_size: Size::new(FontSize::Default.px() / 2, FontSize::Default.px()),
        }
    }
}

impl UiConfig {
    pub fn with_name_scope(mut self, scope: NameScope) -> Self {
        self.name_scope = scope;
        self
    }

    pub fn with_blink_period(mut self, period: Duration) -> Self {
        self.blink_period = period;
        self
    }

    pub fn with_font(mut self, size: FontSize, color: Rgba) -> Self {
        self.font_size = size;
        self.font_color = color;
        self
    }

    pub fn with_focus_border(mut self, border: Border) -> Self {
        self.focus_border = border;
        self
    }

    pub fn with_screen_background(mut self, color: Rgba) -> Self {
        self.screen_background = color;
        self
    }

    pub fn with_cell_size(mut self, cell: Size) -> Self {
        self.cell_size = cell;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font, MonoFont};

    #[test]
    fn test_default_cell_matches_default_glyph() {
        let config = UiConfig::default();
        let font = MonoFont::new(config.font_size, config.font_color);
        assert_eq!(config.cell_size, font.measure("M"));
        assert_eq!(config.cell_size, Size::new(10, 20));
    }

    #[test]
    fn test_builders() {
        let config = UiConfig::default()
            .with_name_scope(NameScope::Global)
            .with_cell_size(Size::new(8, 16));
        assert_eq!(config.name_scope, NameScope::Global);
        assert_eq!(config.cell_size, Size::new(8, 16));
    }
}
