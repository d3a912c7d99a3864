//! User interface for Hydrigo
//!
//! This crate provides the UI layer: palettes, the tab navigation shell and
//! the two screens. Every screen and piece of navigation chrome is a theme
//! consumer: it reads the mode from the [`app_state::ThemeScope`] it is
//! rendered in, resolves its palette, and re-renders when the mode changes.
//!
//! # Palettes
//!
//! The product is strictly black and white:
//! - [`theme::ThemeMode::Light`] - white background, near-black text
//! - [`theme::ThemeMode::Dark`] - black background, near-white text
//!
//! # Modules
//!
//! - [`theme`] - Palettes, navigation theme and status bar style
//! - [`navigation`] - Tabs, navigation state and navigation chrome
//! - [`screens`] - Home and settings screens
//! - [`mount`] - Mounting consumers so they re-render on theme changes
//!
//! # Example
//!
//! ```rust
//! use app_state::{ThemeScope, ThemeStore};
//! use app_ui::mount::Mounted;
//! use app_ui::screens::HomeScreen;
//! use app_ui::theme::{resolve_palette, ThemeMode};
//!
//! let store = ThemeStore::with_mode(ThemeMode::Light);
//! let scope = ThemeScope::new(store.clone());
//! let home = Mounted::mount(HomeScreen::default(), &scope).unwrap();
//!
//! store.toggle_mode();
//! assert_eq!(home.view().background, resolve_palette(ThemeMode::Dark).background);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mount;
pub mod navigation;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use theme::{
    navigation_theme, resolve_palette, status_bar_style, Color, NavigationTheme, Palette,
    StatusBarStyle, ThemeMode, ThemeSnapshot,
};

pub use navigation::{NavigationState, RootNavigator, SharedNavigation, Tab, TabBar};

pub use screens::{HomeScreen, SettingsScreen};

pub use mount::{Mounted, ThemeConsumer};
