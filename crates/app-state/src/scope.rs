//! Theme provider scope
//!
//! A [`ThemeScope`] is what a consumer tree is rendered inside. It carries
//! the application's [`ThemeStore`], or nothing at all when a consumer has
//! been wired outside the provider. Reading the theme from an empty scope is
//! a wiring bug and fails with [`ThemeError::MissingProvider`] instead of
//! quietly falling back to a default palette.

use crate::theme::{ThemeMode, ThemeStore};

/// Theme access errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A consumer read the theme with no store provided
    #[error("{consumer} must be rendered within a theme provider")]
    MissingProvider {
        /// Name of the consumer that attempted the read
        consumer: String,
    },
}

/// Scope that provides a theme store to the consumers rendered inside it
#[derive(Debug, Clone, Default)]
pub struct ThemeScope {
    store: Option<ThemeStore>,
}

impl ThemeScope {
    /// Provide `store` to everything rendered in this scope
    pub fn new(store: ThemeStore) -> Self {
        Self { store: Some(store) }
    }

    /// A scope with no provider
    pub fn empty() -> Self {
        Self { store: None }
    }

    /// Check if a store is provided
    pub fn is_provided(&self) -> bool {
        self.store.is_some()
    }

    /// Get the provided store on behalf of `consumer`
    pub fn store(&self, consumer: &str) -> Result<&ThemeStore, ThemeError> {
        self.store.as_ref().ok_or_else(|| {
            tracing::warn!(consumer, "Theme read outside of a theme provider");
            ThemeError::MissingProvider {
                consumer: consumer.to_string(),
            }
        })
    }

    /// Read the current mode on behalf of `consumer`
    pub fn mode(&self, consumer: &str) -> Result<ThemeMode, ThemeError> {
        self.store(consumer).map(ThemeStore::get_mode)
    }
}

impl From<ThemeStore> for ThemeScope {
    fn from(store: ThemeStore) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_scope_reads_store() {
        let store = ThemeStore::with_mode(ThemeMode::Dark);
        let scope = ThemeScope::new(store.clone());

        assert!(scope.is_provided());
        assert_eq!(scope.mode("HomeScreen").unwrap(), ThemeMode::Dark);
        assert!(scope.store("HomeScreen").unwrap().same_store(&store));
    }

    #[test]
    fn test_scope_reads_are_live() {
        let store = ThemeStore::default();
        let scope = ThemeScope::from(store.clone());

        store.toggle_mode();
        assert_eq!(scope.mode("TabBar").unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_empty_scope_reports_missing_provider() {
        let scope = ThemeScope::empty();
        assert!(!scope.is_provided());

        let err = scope.mode("SettingsScreen").unwrap_err();
        assert_eq!(
            err,
            ThemeError::MissingProvider {
                consumer: "SettingsScreen".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "SettingsScreen must be rendered within a theme provider"
        );
    }

    #[test]
    fn test_default_scope_is_empty() {
        assert!(ThemeScope::default().store("RootNavigator").is_err());
    }
}
