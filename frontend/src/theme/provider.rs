//! Dioxus side of the theme: the `PowerliftingTheme` root component, the
//! webview host it tints, and `use_app_theme` for descendants.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::dioxus_core::{needs_update, Runtime};
use dioxus::prelude::*;
use tracing::{debug, warn};

use super::selector::{compose_theme, AppTheme, PlatformTheme, StaticPlatform, ThemeOptions};
use super::status_bar::{webview_status_bar_script, HostMode, StatusBarHost, StatusBarStyle, StatusBarSync};
use crate::config::{ThemeConfig, PAGE_CONFIG_META};
use crate::error::ThemeError;

/// Tints the webview's status bar through `document::eval`.
///
/// The script runs after `apply_status_bar` returns; a failed run bumps
/// `failed_writes` and re-renders the calling theme root so it re-sends.
#[derive(Debug, Default, Clone)]
pub struct WebviewStatusBar {
    failed: Rc<Cell<u32>>,
}

impl StatusBarHost for WebviewStatusBar {
    fn apply_status_bar(&self, style: StatusBarStyle) -> Result<(), ThemeError> {
        let in_scope = Runtime::try_current()
            .and_then(|rt| rt.try_current_scope_id())
            .is_some();
        if !in_scope {
            return Err(ThemeError::WindowUnavailable(
                "no component scope to evaluate in".to_string(),
            ));
        }

        let eval = document::eval(&webview_status_bar_script(style));
        let failed = self.failed.clone();
        spawn(async move {
            if let Err(err) = eval.await {
                warn!(%err, "status bar script failed");
                failed.set(failed.get() + 1);
                needs_update();
            }
        });
        Ok(())
    }

    fn failed_writes(&self) -> u32 {
        self.failed.get()
    }
}

const WATCH_SYSTEM_DARK: &str = r#"
const query = window.matchMedia ? window.matchMedia('(prefers-color-scheme: dark)') : null;
dioxus.send(query ? query.matches : false);
if (query) {
    query.addEventListener('change', (event) => dioxus.send(event.matches));
    await new Promise(() => {});
}
"#;

/// Follows `prefers-color-scheme`: writes the current value into `target`,
/// then every change the webview reports. Only returns on a channel error.
pub async fn watch_system_dark(mut target: Signal<bool>) -> Result<(), ThemeError> {
    let mut eval = document::eval(WATCH_SYSTEM_DARK);
    loop {
        let dark = eval
            .recv::<bool>()
            .await
            .map_err(|err| ThemeError::HostScript(err.to_string()))?;
        if *target.peek() != dark {
            debug!(dark, "system color scheme changed");
            target.set(dark);
        }
    }
}

/// Theme config embedded in the page as `<meta name="powerlift-theme" content="{json}">`.
pub async fn read_page_config() -> Result<Option<ThemeConfig>, ThemeError> {
    let script = format!(
        r#"const el = document.querySelector('meta[name="{PAGE_CONFIG_META}"]');
return el ? el.getAttribute('content') : null;"#
    );
    let content = document::eval(&script)
        .join::<Option<String>>()
        .await
        .map_err(|err| ThemeError::HostScript(err.to_string()))?;
    ThemeConfig::from_page_meta(content.as_deref())
}

/// Platform and window handles the theme root talks to, plus whether it may
/// touch the window at all.
#[derive(Clone)]
pub struct ThemeHost {
    platform: Rc<dyn PlatformTheme>,
    status_bar: Rc<dyn StatusBarHost>,
    mode: HostMode,
}

impl ThemeHost {
    pub fn new(
        platform: Rc<dyn PlatformTheme>,
        status_bar: Rc<dyn StatusBarHost>,
        mode: HostMode,
    ) -> Self {
        Self {
            platform,
            status_bar,
            mode,
        }
    }

    pub fn webview(platform: StaticPlatform, mode: HostMode) -> Self {
        Self::new(Rc::new(platform), Rc::new(WebviewStatusBar::default()), mode)
    }

    pub fn platform(&self) -> &dyn PlatformTheme {
        self.platform.as_ref()
    }

    pub fn status_bar(&self) -> &dyn StatusBarHost {
        self.status_bar.as_ref()
    }

    pub fn mode(&self) -> HostMode {
        self.mode
    }
}

impl PartialEq for ThemeHost {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.platform), Rc::as_ptr(&other.platform))
            && std::ptr::addr_eq(Rc::as_ptr(&self.status_bar), Rc::as_ptr(&other.status_bar))
            && self.mode == other.mode
    }
}

/// Selects the scheme, tints the status bar once per style change, and
/// provides the theme to `children`.
#[component]
pub fn PowerliftingTheme(
    #[props(!optional, default)] dark_theme: Option<bool>,
    #[props(default = false)] dynamic_color: bool,
    host: ThemeHost,
    children: Element,
) -> Element {
    let theme = compose_theme(
        ThemeOptions {
            dark_theme,
            dynamic_color,
        },
        host.platform(),
    );

    let mut context = use_context_provider(|| Signal::new(theme));
    use_effect(use_reactive((&theme,), move |(theme,)| {
        if *context.peek() != theme {
            context.set(theme);
        }
    }));

    let sync = use_hook(|| Rc::new(RefCell::new(StatusBarSync::new())));
    let style = theme.status_bar_style();
    let failed_writes = host.status_bar().failed_writes();
    use_effect(use_reactive((&style, &host, &failed_writes), move |(style, host, _)| {
        if let Err(err) = sync.borrow_mut().sync(host.mode(), host.status_bar(), style) {
            warn!(%err, "status bar not updated");
        }
    }));

    let typography = theme.typography.body_css();
    rsx! {
        div { class: "powerlifting-theme", style: "{typography}",
            {children}
        }
    }
}

/// The theme provided by the nearest `PowerliftingTheme`.
pub fn use_app_theme() -> AppTheme {
    let theme = use_context::<Signal<AppTheme>>();
    theme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DARK_COLOR_SCHEME;

    #[test]
    fn webview_write_outside_a_component_has_no_window() {
        let host = WebviewStatusBar::default();
        let style = StatusBarStyle::for_scheme(&DARK_COLOR_SCHEME, true);
        let err = host.apply_status_bar(style).unwrap_err();
        assert!(matches!(err, ThemeError::WindowUnavailable(_)));
        assert_eq!(host.failed_writes(), 0);
    }
}
