//! Hydrigo Branding
//!
//! Branding constants shared by the navigation chrome and screens.

/// Application name
pub const APP_NAME: &str = "Hydrigo";

/// Application tagline
pub const APP_TAGLINE: &str = "Irrigation and pump monitoring";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Brand colors. The product is strictly black and white.
pub mod colors {
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black
    pub const BLACK: &str = "#000000";
}

/// About line shown by the shell
pub fn about() -> String {
    format!("{} v{} · {}", APP_NAME, APP_VERSION, APP_TAGLINE)
}
