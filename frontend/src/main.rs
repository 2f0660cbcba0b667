//! Powerlifting frontend - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --features desktop.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    use powerlift_frontend::app::App;
    use powerlift_frontend::config::ThemeConfig;

    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    #[cfg(not(target_arch = "wasm32"))]
    dotenv::dotenv().ok();

    let config = ThemeConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid theme config, using defaults");
        ThemeConfig::default()
    });
    tracing::info!(?config, "launching");
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Native run without the desktop feature: hand off to the Dioxus CLI, which
/// builds the wasm bundle and serves it.
#[cfg(all(not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    dotenv::dotenv().ok();
    let status = std::process::Command::new("dx")
        .arg("serve")
        .status()
        .context("could not run 'dx serve'; install it with: cargo install dioxus-cli")?;
    anyhow::ensure!(status.success(), "dx serve exited with {status}");
    Ok(())
}
