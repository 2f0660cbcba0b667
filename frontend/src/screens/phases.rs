use dioxus::prelude::*;
use crate::theme::{spacing, LiftPhase};
use crate::widgets::{PhaseChip, SurfaceCard};

#[component]
pub fn PhasesScreen() -> Element {
    let mut current = use_signal(|| LiftPhase::Eccentric);

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING};",
            SurfaceCard {
                p { style: "margin: 0 0 {spacing::SM};", "Tap a phase to highlight it." }
                div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM};",
                    for (phase, label) in LiftPhase::ALL.map(|p| (p, p.label())) {
                        span {
                            key: "{label}",
                            style: "cursor: pointer;",
                            onclick: move |_| current.set(phase),
                            PhaseChip { phase, active: current() == phase }
                        }
                    }
                }
            }
        }
    }
}
