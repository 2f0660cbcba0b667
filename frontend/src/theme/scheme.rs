//! Material-style color schemes built from the brand palette.

use super::color::Color;
use super::palette;

/// Five role slots consumed by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub background: Color,
    pub surface: Color,
}

pub const DARK_COLOR_SCHEME: ColorScheme = ColorScheme {
    primary: palette::POWERLIFTING_RED,
    secondary: palette::POWERLIFTING_ORANGE,
    tertiary: palette::POWERLIFTING_GREEN,
    background: palette::POWERLIFTING_BLACK,
    surface: palette::POWERLIFTING_DARK_GRAY,
};

pub const LIGHT_COLOR_SCHEME: ColorScheme = ColorScheme {
    primary: palette::POWERLIFTING_RED,
    secondary: palette::POWERLIFTING_ORANGE,
    tertiary: palette::POWERLIFTING_GREEN,
    background: palette::POWERLIFTING_WHITE,
    surface: palette::POWERLIFTING_LIGHT_GRAY,
};

impl ColorScheme {
    pub fn on_primary(&self) -> Color {
        self.primary.contrasting()
    }

    pub fn on_background(&self) -> Color {
        self.background.contrasting()
    }

    pub fn on_surface(&self) -> Color {
        self.surface.contrasting()
    }

    /// Slots in display order, labelled.
    pub fn slots(&self) -> [(&'static str, Color); 5] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("tertiary", self.tertiary),
            ("background", self.background),
            ("surface", self.surface),
        ]
    }
}
