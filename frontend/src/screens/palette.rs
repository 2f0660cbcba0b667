use dioxus::prelude::*;
use crate::theme::palette::{self, PaletteGroup};
use crate::theme::Color;
use crate::theme::spacing;
use crate::widgets::Swatch;

#[component]
pub fn PaletteScreen() -> Element {
    let groups: Vec<(&'static str, Vec<(&'static str, Color)>)> = PaletteGroup::ALL
        .iter()
        .map(|g| (g.label(), palette::group(*g).map(|e| (e.name, e.color)).collect()))
        .collect();

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING};",
            for (label, entries) in groups {
                section { key: "{label}", style: "margin-bottom: {spacing::LG};",
                    h2 { style: "font-size: 1.1rem; margin: 0 0 {spacing::SM};", "{label}" }
                    div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM};",
                        for (name, color) in entries {
                            Swatch { key: "{name}", name: name.to_string(), color }
                        }
                    }
                }
            }
        }
    }
}
