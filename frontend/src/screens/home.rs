use dioxus::prelude::*;
use crate::screens::{PaletteScreen, PhasesScreen, SchemeScreen};
use crate::theme::provider::use_app_theme;
use crate::theme::spacing;

#[derive(Clone, Copy, PartialEq)]
pub enum HomeTab {
    Palette,
    Scheme,
    Phases,
}

/// Tabs plus the dark-mode and dynamic-color toggles that drive the theme root.
#[component]
pub fn HomeScreen(dark_override: Signal<Option<bool>>, dynamic_color: Signal<bool>) -> Element {
    let mut tab = use_signal(|| HomeTab::Palette);
    let mut dark_override = dark_override;
    let mut dynamic_color = dynamic_color;
    let scheme = use_app_theme().scheme;

    let active_bg = scheme.primary.to_css();
    let active_fg = scheme.on_primary().to_css();
    let idle_fg = scheme.on_background().to_css();
    let toggle_style = format!("padding: 8px 16px; border-radius: 8px; border: 1px solid {idle_fg}; background: transparent; color: {idle_fg}; cursor: pointer;");
    let tab_style = move |t: HomeTab| {
        if tab() == t {
            format!("padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {active_bg}; color: {active_fg};")
        } else {
            format!("padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: transparent; color: {idle_fg};")
        }
    };
    let mode_label = match dark_override() {
        None => "System",
        Some(true) => "Dark",
        Some(false) => "Light",
    };
    let dynamic_label = if dynamic_color() { "Dynamic color: on" } else { "Dynamic color: off" };
    let divider = scheme.surface.to_css();

    rsx! {
        div { style: "display: flex; flex-direction: column; min-height: 100vh;",
            div { style: "display: flex; padding: 12px {spacing::LG}; gap: 12px; align-items: center; border-bottom: 1px solid {divider}; flex-shrink: 0;",
                button { onclick: move |_| tab.set(HomeTab::Palette), style: tab_style(HomeTab::Palette), "Palette" }
                button { onclick: move |_| tab.set(HomeTab::Scheme), style: tab_style(HomeTab::Scheme), "Scheme" }
                button { onclick: move |_| tab.set(HomeTab::Phases), style: tab_style(HomeTab::Phases), "Phases" }
                div { style: "flex: 1;" }
                button {
                    onclick: move |_| {
                        let next = match dark_override() {
                            None => Some(true),
                            Some(true) => Some(false),
                            Some(false) => None,
                        };
                        dark_override.set(next);
                    },
                    style: "{toggle_style}",
                    "Theme: {mode_label}"
                }
                button {
                    onclick: move |_| dynamic_color.set(!dynamic_color()),
                    style: "{toggle_style}",
                    "{dynamic_label}"
                }
            }
            div { style: "flex: 1; overflow: auto;",
                {match tab() {
                    HomeTab::Palette => rsx! { PaletteScreen {} },
                    HomeTab::Scheme => rsx! { SchemeScreen {} },
                    HomeTab::Phases => rsx! { PhasesScreen {} },
                }}
            }
        }
    }
}
