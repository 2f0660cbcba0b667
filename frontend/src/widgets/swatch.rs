use dioxus::prelude::*;
use crate::theme::Color;

#[component]
pub fn Swatch(name: String, color: Color) -> Element {
    let fill = color.to_css();
    let label_color = color.contrasting().to_css();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: flex-end; width: 132px; height: 88px; padding: 8px; border-radius: 8px; box-sizing: border-box; background: {fill}; color: {label_color};",
            span { style: "font-size: 0.8rem; font-weight: 600;", "{name}" }
            span { style: "font-size: 0.75rem; opacity: 0.8; font-family: monospace;", "{color}" }
        }
    }
}
