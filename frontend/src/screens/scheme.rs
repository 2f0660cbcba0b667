use dioxus::prelude::*;
use crate::theme::provider::use_app_theme;
use crate::theme::{spacing, SchemeSource};
use crate::widgets::{SurfaceCard, Swatch};

#[component]
pub fn SchemeScreen() -> Element {
    let theme = use_app_theme();
    let source = match theme.source {
        SchemeSource::Dynamic { dark: true } => "Dynamic (dark)",
        SchemeSource::Dynamic { dark: false } => "Dynamic (light)",
        SchemeSource::Dark => "Brand dark",
        SchemeSource::Light => "Brand light",
    };
    let status_bar = theme.status_bar_style();
    let bar_color = status_bar.background;
    let icons = if status_bar.light_appearance { "dark icons" } else { "light icons" };

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING};",
            SurfaceCard {
                p { style: "margin: 0 0 {spacing::XS};", "Source: {source}" }
                p { style: "margin: 0;", "Status bar: {bar_color} with {icons}" }
            }
            div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM}; margin-top: {spacing::MD};",
                for (name, color) in theme.scheme.slots() {
                    Swatch { key: "{name}", name: name.to_string(), color }
                }
            }
        }
    }
}
