//! Error type shared by the theme layer and its hosts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// The hosting window (or webview document) could not be resolved.
    #[error("host window unavailable: {0}")]
    WindowUnavailable(String),

    #[error("host script failed: {0}")]
    HostScript(String),

    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    #[error("invalid value for {key}: `{value}`")]
    InvalidConfig { key: String, value: String },

    #[error("invalid theme config json: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
