use dioxus::prelude::*;
use crate::theme::provider::use_app_theme;
use crate::theme::spacing;

#[component]
pub fn SurfaceCard(children: Element) -> Element {
    let scheme = use_app_theme().scheme;
    let surface = scheme.surface.to_css();
    let on_surface = scheme.on_surface().to_css();
    rsx! {
        div {
            style: "background: {surface}; color: {on_surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM};",
            {children}
        }
    }
}
