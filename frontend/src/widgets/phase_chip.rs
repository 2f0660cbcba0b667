use dioxus::prelude::*;
use crate::theme::LiftPhase;

#[component]
pub fn PhaseChip(phase: LiftPhase, active: bool) -> Element {
    let accent = phase.accent();
    let fill = phase.tint().unwrap_or(accent).to_css();
    let text = phase.tint().unwrap_or(accent).contrasting().to_css();
    let border = if active { format!("2px solid {}", accent.to_css()) } else { "2px solid transparent".to_string() };
    let label = phase.label();
    rsx! {
        span {
            style: "display: inline-block; padding: 6px 14px; border-radius: 16px; background: {fill}; color: {text}; border: {border}; font-weight: 600;",
            "{label}"
        }
    }
}
