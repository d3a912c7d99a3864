//! Platform integration for Hydrigo
//!
//! This crate answers questions about the host environment. The only one the
//! shell asks today is the user's preferred color scheme, sampled once when
//! the theme store is created.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;

pub use appearance::{
    ColorSchemeSource, FixedColorScheme, HostColorScheme, SystemColorScheme,
};
