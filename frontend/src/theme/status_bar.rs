//! Status-bar tinting: the style derived from a theme, the host seam that
//! applies it, and the sync guard that applies it once per change.

use super::color::Color;
use super::scheme::ColorScheme;
use crate::error::ThemeError;
use tracing::{debug, warn};

/// What the host status bar should look like.
///
/// `light_appearance` means dark icons on a light bar; it is the inverse of
/// the theme's dark flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusBarStyle {
    pub background: Color,
    pub light_appearance: bool,
}

impl StatusBarStyle {
    pub fn for_scheme(scheme: &ColorScheme, dark_theme: bool) -> Self {
        Self {
            background: scheme.surface,
            light_appearance: !dark_theme,
        }
    }
}

/// Window chrome the theme writes to.
pub trait StatusBarHost {
    fn apply_status_bar(&self, style: StatusBarStyle) -> Result<(), ThemeError>;

    /// Running count of writes that failed after `apply_status_bar` had
    /// already returned `Ok`. Hosts that write synchronously keep the default.
    fn failed_writes(&self) -> u32 {
        0
    }
}

/// Re-sends of one style after the host reported it failed.
pub const MAX_STATUS_BAR_RETRIES: u32 = 3;

/// Whether the theme runs in a live window or inside a preview/editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostMode {
    #[default]
    Interactive,
    Preview,
}

/// Applies a style only when it differs from the last one applied.
#[derive(Debug, Default)]
pub struct StatusBarSync {
    applied: Option<StatusBarStyle>,
    failures_seen: u32,
    retries: u32,
}

impl StatusBarSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Option<StatusBarStyle> {
        self.applied
    }

    /// Returns `Ok(true)` when the host was written to. A failed write leaves
    /// the previous style recorded so the next call retries. A late failure
    /// reported through [`StatusBarHost::failed_writes`] forgets the applied
    /// style, so the same style is sent again (at most
    /// [`MAX_STATUS_BAR_RETRIES`] times).
    pub fn sync(
        &mut self,
        mode: HostMode,
        host: &dyn StatusBarHost,
        style: StatusBarStyle,
    ) -> Result<bool, ThemeError> {
        if mode == HostMode::Preview {
            debug!("preview host: status bar left untouched");
            return Ok(false);
        }

        let mut retrying = false;
        let failed = host.failed_writes();
        let newly_failed = failed > self.failures_seen;
        // A swapped host starts its own count.
        self.failures_seen = failed;
        if newly_failed && self.applied == Some(style) {
            if self.retries < MAX_STATUS_BAR_RETRIES {
                self.retries += 1;
                self.applied = None;
                retrying = true;
            } else {
                warn!(background = %style.background, "status bar keeps failing, giving up on this style");
            }
        }

        if self.applied == Some(style) {
            return Ok(false);
        }
        host.apply_status_bar(style)?;
        debug!(background = %style.background, light_appearance = style.light_appearance, retrying, "status bar tinted");
        if !retrying {
            self.retries = 0;
        }
        self.applied = Some(style);
        Ok(true)
    }
}

/// Script that tints a webview's status bar through the `theme-color` and
/// `color-scheme` meta tags.
pub fn webview_status_bar_script(style: StatusBarStyle) -> String {
    let scheme = if style.light_appearance { "light" } else { "dark" };
    format!(
        r#"(function() {{
    function meta(name) {{
        var el = document.querySelector('meta[name="' + name + '"]');
        if (!el) {{
            el = document.createElement('meta');
            el.setAttribute('name', name);
            document.head.appendChild(el);
        }}
        return el;
    }}
    meta('theme-color').setAttribute('content', '{color}');
    meta('color-scheme').setAttribute('content', '{scheme}');
    document.documentElement.style.colorScheme = '{scheme}';
}})();"#,
        color = style.background.to_css(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::scheme::DARK_COLOR_SCHEME;

    #[test]
    fn script_carries_surface_and_scheme() {
        let style = StatusBarStyle::for_scheme(&DARK_COLOR_SCHEME, true);
        let script = webview_status_bar_script(style);
        assert!(script.contains("'#2d3748'"));
        assert!(script.contains("setAttribute('content', 'dark')"));
    }
}
