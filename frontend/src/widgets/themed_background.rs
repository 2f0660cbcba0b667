use dioxus::prelude::*;
use crate::theme::provider::use_app_theme;

#[component]
pub fn ThemedBackground(children: Element) -> Element {
    let scheme = use_app_theme().scheme;
    let bg = scheme.background.to_css();
    let fg = scheme.on_background().to_css();
    rsx! {
        div {
            style: "min-height: 100vh; background: {bg}; color: {fg};",
            {children}
        }
    }
}
