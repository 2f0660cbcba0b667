//! App theme: powerlifting palette, color schemes, scheme selection, and
//! status-bar tinting.
//!
//! Everything here is framework-free; the Dioxus provider lives in
//! [`provider`] and is only built with the `dioxus` feature.

pub mod color;
pub mod palette;
pub mod phase;
pub mod scheme;
pub mod selector;
pub mod status_bar;
pub mod typography;

#[cfg(feature = "dioxus")]
pub mod provider;

pub use color::Color;
pub use phase::LiftPhase;
pub use scheme::{ColorScheme, DARK_COLOR_SCHEME, LIGHT_COLOR_SCHEME};
pub use selector::{
    compose_theme, AppTheme, PlatformTheme, SchemeSource, StaticPlatform, ThemeOptions,
    DYNAMIC_COLOR_MIN_API_LEVEL,
};
pub use status_bar::{
    HostMode, StatusBarHost, StatusBarStyle, StatusBarSync, MAX_STATUS_BAR_RETRIES,
};
pub use typography::Typography;

/// 8dp grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_PADDING: &str = "16px";
    pub const SCREEN_PADDING: &str = "16px";
}
