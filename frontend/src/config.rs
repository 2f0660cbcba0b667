//! Theme preferences from the environment, or on web builds from a JSON blob
//! in the page's `<meta name="powerlift-theme">` tag.

use crate::error::ThemeError;
use crate::theme::{HostMode, ThemeOptions};
use serde::Deserialize;
use std::env;

pub const ENV_DARK_THEME: &str = "POWERLIFT_DARK_THEME";
pub const ENV_DYNAMIC_COLOR: &str = "POWERLIFT_DYNAMIC_COLOR";
pub const ENV_API_LEVEL: &str = "POWERLIFT_API_LEVEL";
pub const ENV_PREVIEW: &str = "POWERLIFT_PREVIEW";

/// `name` of the page meta tag whose `content` holds the JSON config.
pub const PAGE_CONFIG_META: &str = "powerlift-theme";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `None` follows the system preference.
    pub dark_theme: Option<bool>,
    pub dynamic_color: bool,
    /// Platform API level reported by the host; gates dynamic color.
    pub api_level: u32,
    pub preview: bool,
}

impl ThemeConfig {
    pub fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ThemeError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_DARK_THEME) {
            config.dark_theme = match raw.trim().to_ascii_lowercase().as_str() {
                "" | "system" | "auto" => None,
                _ => Some(parse_bool(ENV_DARK_THEME, &raw)?),
            };
        }
        if let Some(raw) = lookup(ENV_DYNAMIC_COLOR) {
            config.dynamic_color = parse_bool(ENV_DYNAMIC_COLOR, &raw)?;
        }
        if let Some(raw) = lookup(ENV_API_LEVEL) {
            config.api_level = raw.trim().parse().map_err(|_| ThemeError::InvalidConfig {
                key: ENV_API_LEVEL.to_string(),
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(ENV_PREVIEW) {
            config.preview = parse_bool(ENV_PREVIEW, &raw)?;
        }
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the page meta tag content. A missing or blank tag is `Ok(None)`.
    pub fn from_page_meta(content: Option<&str>) -> Result<Option<Self>, ThemeError> {
        match content.map(str::trim) {
            None | Some("") => Ok(None),
            Some(json) => Self::from_json(json).map(Some),
        }
    }

    pub fn options(&self) -> ThemeOptions {
        ThemeOptions {
            dark_theme: self.dark_theme,
            dynamic_color: self.dynamic_color,
        }
    }

    pub fn host_mode(&self) -> HostMode {
        if self.preview {
            HostMode::Preview
        } else {
            HostMode::Interactive
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ThemeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ThemeError::InvalidConfig {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("K", " Yes ").unwrap());
        assert!(!parse_bool("K", "0").unwrap());
        assert!(parse_bool("K", "maybe").is_err());
    }
}
