//! Shell configuration
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) is valid.

use app_platform::{ColorSchemeSource, FixedColorScheme, HostColorScheme, SystemColorScheme};
use app_ui::Tab;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration is not valid JSON for [`AppConfig`]
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `log_filter` is not a valid filter directive
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter {
        /// The rejected filter
        filter: String,
        /// Parser message
        reason: String,
    },
}

/// Where the initial theme preference comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostPreference {
    /// Ask the operating system
    #[default]
    System,
    /// Behave as if the host prefers light
    Light,
    /// Behave as if the host prefers dark
    Dark,
}

impl HostPreference {
    /// Source to sample when the theme store is created
    pub fn source(&self) -> Box<dyn ColorSchemeSource> {
        match self {
            HostPreference::System => Box::new(SystemColorScheme),
            HostPreference::Light => Box::new(FixedColorScheme(HostColorScheme::Light)),
            HostPreference::Dark => Box::new(FixedColorScheme(HostColorScheme::Dark)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial theme preference source
    pub host_preference: HostPreference,
    /// Tab shown at startup
    pub initial_tab: Tab,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host_preference: HostPreference::System,
            initial_tab: Tab::Home,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the log filter parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.env_filter().map(|_| ())
    }

    /// Log filter as a `tracing_subscriber` filter
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })
    }
}
