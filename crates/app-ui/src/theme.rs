//! Palettes and theme resolution for Hydrigo
//!
//! Each [`ThemeMode`] maps to one fixed [`Palette`], one [`NavigationTheme`]
//! and one [`StatusBarStyle`]. Resolution is a table lookup; nothing here is
//! mutable. The mode itself lives in the [`app_state::ThemeStore`].
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{resolve_palette, ThemeMode};
//!
//! let palette = resolve_palette(ThemeMode::Dark);
//! assert_eq!(palette.background, "#000000");
//! ```

use app_core::branding::colors::{BLACK, WHITE};
use app_state::{ThemeError, ThemeScope};
use serde::Serialize;

pub use app_state::ThemeMode;

// =============================================================================
// Color Types
// =============================================================================

/// A color as a CSS color string (e.g., "#FFFFFF" or "rgba(0,0,0,0.2)")
pub type Color = &'static str;

/// Parse a `#RRGGBB` color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Palette
// =============================================================================

/// Named colors screens are drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Card and tile background
    pub surface: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text
    pub muted: Color,
    /// Card borders and dividers
    pub border: Color,
    /// Active tab and accent color
    pub tint: Color,
    /// Inactive tab icon color
    pub tab_icon_default: Color,
}

impl Palette {
    /// All colors, in field order
    pub fn colors(&self) -> [Color; 7] {
        [
            self.background,
            self.surface,
            self.text,
            self.muted,
            self.border,
            self.tint,
            self.tab_icon_default,
        ]
    }
}

/// Light palette
pub static LIGHT_PALETTE: Palette = Palette {
    background: WHITE,
    surface: "#F5F5F5",
    text: "#0A0A0A",
    muted: "#6E6E6E",
    border: "#D4D4D4",
    tint: "#111111",
    tab_icon_default: "#9E9E9E",
};

/// Dark palette
pub static DARK_PALETTE: Palette = Palette {
    background: BLACK,
    surface: "#121212",
    text: "#FAFAFA",
    muted: "#A1A1A1",
    border: "#2E2E2E",
    tint: "#EDEDED",
    tab_icon_default: "#5F5F5F",
};

/// Get the palette for a mode
pub fn resolve_palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}

// =============================================================================
// Navigation Theme
// =============================================================================

/// Colors of the navigation container (headers, cards, badges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationTheme {
    /// Whether this is a dark navigation theme
    pub dark: bool,
    /// Primary/accent color
    pub primary: Color,
    /// Container background
    pub background: Color,
    /// Header and card background
    pub card: Color,
    /// Header text
    pub text: Color,
    /// Header and tab bar border
    pub border: Color,
    /// Badge color
    pub notification: Color,
}

/// Light navigation theme
pub static LIGHT_NAVIGATION: NavigationTheme = NavigationTheme {
    dark: false,
    primary: BLACK,
    background: WHITE,
    card: WHITE,
    text: BLACK,
    border: BLACK,
    notification: BLACK,
};

/// Dark navigation theme
pub static DARK_NAVIGATION: NavigationTheme = NavigationTheme {
    dark: true,
    primary: WHITE,
    background: BLACK,
    card: BLACK,
    text: WHITE,
    border: WHITE,
    notification: WHITE,
};

/// Get the navigation theme for a mode
pub fn navigation_theme(mode: ThemeMode) -> &'static NavigationTheme {
    match mode {
        ThemeMode::Light => &LIGHT_NAVIGATION,
        ThemeMode::Dark => &DARK_NAVIGATION,
    }
}

/// Status bar content style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBarStyle {
    /// Light content, for dark backgrounds
    Light,
    /// Dark content, for light backgrounds
    Dark,
}

/// Get the status bar style for a mode
pub fn status_bar_style(mode: ThemeMode) -> StatusBarStyle {
    match mode {
        ThemeMode::Light => StatusBarStyle::Dark,
        ThemeMode::Dark => StatusBarStyle::Light,
    }
}

// =============================================================================
// Consumer Reads
// =============================================================================

/// Mode and palette as read by one consumer at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    /// Mode at the time of the read
    pub mode: ThemeMode,
    /// Palette for that mode
    pub palette: &'static Palette,
}

impl ThemeSnapshot {
    /// Read the current theme from `scope` on behalf of `consumer`
    ///
    /// Fails with [`ThemeError::MissingProvider`] when `scope` carries no store.
    pub fn read(scope: &ThemeScope, consumer: &str) -> Result<Self, ThemeError> {
        let mode = scope.mode(consumer)?;
        Ok(Self {
            mode,
            palette: resolve_palette(mode),
        })
    }
}
