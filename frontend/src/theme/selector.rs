//! Scheme selection and theme composition.

use super::scheme::{ColorScheme, DARK_COLOR_SCHEME, LIGHT_COLOR_SCHEME};
use super::status_bar::StatusBarStyle;
use super::typography::{Typography, DEFAULT_TYPOGRAPHY};
use tracing::debug;

/// First platform API level that can extract a wallpaper-derived scheme.
pub const DYNAMIC_COLOR_MIN_API_LEVEL: u32 = 31;

/// Live platform state the selector consults.
pub trait PlatformTheme {
    fn api_level(&self) -> u32;

    fn is_system_in_dark_theme(&self) -> bool;

    /// Wallpaper-derived scheme. Only called when `api_level()` clears
    /// [`DYNAMIC_COLOR_MIN_API_LEVEL`].
    fn dynamic_color_scheme(&self, dark: bool) -> ColorScheme;

    fn supports_dynamic_color(&self) -> bool {
        self.api_level() >= DYNAMIC_COLOR_MIN_API_LEVEL
    }
}

/// Platform snapshot with fixed values. Hosts rebuild it when the system
/// preference changes; tests build it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform {
    pub api_level: u32,
    pub system_dark: bool,
    pub dynamic_dark: ColorScheme,
    pub dynamic_light: ColorScheme,
}

impl StaticPlatform {
    /// Without wallpaper extraction the dynamic schemes fall back to the brand ones.
    pub fn new(api_level: u32, system_dark: bool) -> Self {
        Self {
            api_level,
            system_dark,
            dynamic_dark: DARK_COLOR_SCHEME,
            dynamic_light: LIGHT_COLOR_SCHEME,
        }
    }

    pub fn with_dynamic_schemes(mut self, dark: ColorScheme, light: ColorScheme) -> Self {
        self.dynamic_dark = dark;
        self.dynamic_light = light;
        self
    }
}

impl PlatformTheme for StaticPlatform {
    fn api_level(&self) -> u32 {
        self.api_level
    }

    fn is_system_in_dark_theme(&self) -> bool {
        self.system_dark
    }

    fn dynamic_color_scheme(&self, dark: bool) -> ColorScheme {
        if dark {
            self.dynamic_dark
        } else {
            self.dynamic_light
        }
    }
}

/// Where the active scheme comes from. Resolved once per composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeSource {
    Dynamic { dark: bool },
    Dark,
    Light,
}

impl SchemeSource {
    pub fn select(dark_theme: bool, dynamic_color: bool, api_level: u32) -> Self {
        if dynamic_color && api_level >= DYNAMIC_COLOR_MIN_API_LEVEL {
            SchemeSource::Dynamic { dark: dark_theme }
        } else if dark_theme {
            SchemeSource::Dark
        } else {
            SchemeSource::Light
        }
    }

    pub fn resolve(self, platform: &dyn PlatformTheme) -> ColorScheme {
        match self {
            SchemeSource::Dynamic { dark } => platform.dynamic_color_scheme(dark),
            SchemeSource::Dark => DARK_COLOR_SCHEME,
            SchemeSource::Light => LIGHT_COLOR_SCHEME,
        }
    }
}

/// Caller-facing theme inputs. Brand colors are the default: dynamic color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeOptions {
    /// `None` follows the platform's light/dark preference.
    pub dark_theme: Option<bool>,
    pub dynamic_color: bool,
}

/// The theme context handed to the rendering subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppTheme {
    pub scheme: ColorScheme,
    pub typography: Typography,
    pub dark: bool,
    pub source: SchemeSource,
}

impl AppTheme {
    pub fn status_bar_style(&self) -> StatusBarStyle {
        StatusBarStyle::for_scheme(&self.scheme, self.dark)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            scheme: LIGHT_COLOR_SCHEME,
            typography: DEFAULT_TYPOGRAPHY,
            dark: false,
            source: SchemeSource::Light,
        }
    }
}

pub fn compose_theme(options: ThemeOptions, platform: &dyn PlatformTheme) -> AppTheme {
    let dark = options
        .dark_theme
        .unwrap_or_else(|| platform.is_system_in_dark_theme());
    let source = SchemeSource::select(dark, options.dynamic_color, platform.api_level());
    debug!(?source, dark, api_level = platform.api_level(), "theme scheme selected");
    AppTheme {
        scheme: source.resolve(platform),
        typography: DEFAULT_TYPOGRAPHY,
        dark,
        source,
    }
}
