use dioxus::prelude::*;
use tracing::{debug, warn};
use crate::config::ThemeConfig;
use crate::screens::HomeScreen;
use crate::theme::provider::{read_page_config, watch_system_dark, PowerliftingTheme, ThemeHost};
use crate::theme::StaticPlatform;
use crate::widgets::ThemedBackground;

/// Root component. Expects a [`ThemeConfig`] in the root context; a config
/// embedded in the page replaces it once read.
#[component]
pub fn App() -> Element {
    let initial = use_context::<ThemeConfig>();
    let mut config = use_signal(|| initial.clone());
    let mut dark_override = use_signal(|| initial.dark_theme);
    let mut dynamic_color = use_signal(|| initial.dynamic_color);
    let system_dark = use_signal(|| false);

    use_future(move || async move {
        match read_page_config().await {
            Ok(Some(page)) => {
                debug!(?page, "theme config read from page");
                dark_override.set(page.dark_theme);
                dynamic_color.set(page.dynamic_color);
                config.set(page);
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "page theme config ignored"),
        }
    });

    use_future(move || async move {
        if let Err(err) = watch_system_dark(system_dark).await {
            warn!(%err, "stopped following system color scheme");
        }
    });

    let host = use_memo(move || {
        let config = config();
        ThemeHost::webview(
            StaticPlatform::new(config.api_level, system_dark()),
            config.host_mode(),
        )
    });

    rsx! {
        PowerliftingTheme {
            dark_theme: dark_override(),
            dynamic_color: dynamic_color(),
            host: host(),
            ThemedBackground {
                HomeScreen { dark_override, dynamic_color }
            }
        }
    }
}
