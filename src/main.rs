//! Hydrigo shell demo
//!
//! Starts one shell instance, prints the rendered frame as JSON, flips the
//! dark mode switch on the settings tab and prints the frame again.
//!
//! Usage: `hydrigo [config.json]`

use anyhow::Context;
use app_ui::Tab;
use hydrigo::{App, AppConfig};
use tracing_subscriber::EnvFilter;

fn load_config() -> anyhow::Result<AppConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            Ok(AppConfig::from_json(&json)?)
        }
        None => Ok(AppConfig::default()),
    }
}

fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_logging(&config)?;

    tracing::info!("{}", app_core::branding::about());
    let app = App::new(config)?;

    println!("{}", serde_json::to_string_pretty(&app.frame())?);

    app.switch_tab(Tab::Settings)?;
    let dark = !app.theme_mode().is_dark();
    app.set_dark_mode(dark)?;
    tracing::info!(mode = %app.theme_mode(), "Dark mode switch flipped");

    println!("{}", serde_json::to_string_pretty(&app.frame())?);
    Ok(())
}
