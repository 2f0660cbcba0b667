//! Powerlifting app frontend: brand palette, theme selection, and the Dioxus
//! shell that renders under it.

pub mod config;
pub mod error;
pub mod theme;

#[cfg(feature = "dioxus")]
pub mod app;
#[cfg(feature = "dioxus")]
pub mod screens;
#[cfg(feature = "dioxus")]
pub mod widgets;
