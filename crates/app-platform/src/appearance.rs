//! Host appearance queries
//!
//! The host reports a color scheme of light, dark, or nothing useful at all.
//! [`ColorSchemeSource`] hides where that answer comes from so the theme store
//! can be built against the real OS in the app and a fixed value in tests.

use serde::{Deserialize, Serialize};

/// Color scheme reported by the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostColorScheme {
    /// Host prefers a light appearance
    Light,
    /// Host prefers a dark appearance
    Dark,
    /// Host gave no answer, or one we do not understand
    #[default]
    Unknown,
}

impl HostColorScheme {
    /// Map a raw scheme name as reported by a host API
    ///
    /// Anything other than `"light"` or `"dark"` (case-insensitive, surrounding
    /// whitespace ignored) is [`HostColorScheme::Unknown`], as is `None`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => HostColorScheme::Light,
            Some("dark") => HostColorScheme::Dark,
            _ => HostColorScheme::Unknown,
        }
    }

    /// Whether the host expressed a definite preference
    pub fn is_known(&self) -> bool {
        !matches!(self, HostColorScheme::Unknown)
    }
}

impl std::fmt::Display for HostColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostColorScheme::Light => write!(f, "light"),
            HostColorScheme::Dark => write!(f, "dark"),
            HostColorScheme::Unknown => write!(f, "unknown"),
        }
    }
}

/// Something that can report the host's preferred color scheme
pub trait ColorSchemeSource {
    /// Query the current preference
    fn color_scheme(&self) -> HostColorScheme;
}

/// Reads the preference from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn color_scheme(&self) -> HostColorScheme {
        #[allow(unreachable_patterns)]
        let scheme = match dark_light::detect() {
            dark_light::Mode::Dark => HostColorScheme::Dark,
            dark_light::Mode::Light => HostColorScheme::Light,
            _ => HostColorScheme::Unknown,
        };
        tracing::debug!(%scheme, "Detected host color scheme");
        scheme
    }
}

/// Always reports the same preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedColorScheme(pub HostColorScheme);

impl ColorSchemeSource for FixedColorScheme {
    fn color_scheme(&self) -> HostColorScheme {
        self.0
    }
}

impl<S: ColorSchemeSource + ?Sized> ColorSchemeSource for &S {
    fn color_scheme(&self) -> HostColorScheme {
        (**self).color_scheme()
    }
}
