//! Application state management for Hydrigo
//!
//! This crate owns the one piece of mutable UI state the shell has: the
//! theme mode. It provides the [`theme::ThemeStore`] that holds it, the
//! subscription handles consumers use to re-render on change, and the
//! [`scope::ThemeScope`] that makes a store available to a consumer tree.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scope;
pub mod theme;

pub use scope::{ThemeError, ThemeScope};
pub use theme::{ParseThemeModeError, Subscription, ThemeMode, ThemeStore, WeakThemeStore};
