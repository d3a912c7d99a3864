//! Hydrigo app shell
//!
//! An [`App`] is one running instance of the shell. It creates the theme
//! store from the host's color preference, provides it to the navigation
//! chrome and both screens, and keeps their rendered views current as the
//! theme changes.
//!
//! # Example
//!
//! ```rust
//! use app_platform::{FixedColorScheme, HostColorScheme};
//! use hydrigo::{App, AppConfig, ScreenView};
//! use app_ui::ThemeMode;
//!
//! let app = App::with_source(AppConfig::default(), &FixedColorScheme(HostColorScheme::Dark)).unwrap();
//! assert_eq!(app.theme_mode(), ThemeMode::Dark);
//!
//! app.set_dark_mode(false).unwrap();
//! let frame = app.frame();
//! assert_eq!(frame.root.status_bar, app_ui::StatusBarStyle::Dark);
//! assert!(matches!(frame.screen, ScreenView::Home(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

pub use config::{AppConfig, ConfigError, HostPreference};

use app_platform::ColorSchemeSource;
use app_state::{ThemeError, ThemeScope, ThemeStore};
use app_ui::navigation::{RootView, TabBarView};
use app_ui::screens::{HomeView, SettingsView};
use app_ui::{
    HomeScreen, Mounted, NavigationState, RootNavigator, SettingsScreen, SharedNavigation, Tab,
    TabBar, ThemeMode,
};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Errors from the app shell
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Theme access failed
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// View of the active tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", content = "view", rename_all = "lowercase")]
pub enum ScreenView {
    /// Home tab
    Home(HomeView),
    /// Settings tab
    Settings(SettingsView),
}

/// Everything currently on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Navigation container and status bar
    pub root: RootView,
    /// Header and tab bar
    pub tab_bar: TabBarView,
    /// Active screen
    pub screen: ScreenView,
}

/// One running instance of the shell
pub struct App {
    config: AppConfig,
    store: ThemeStore,
    scope: ThemeScope,
    navigation: SharedNavigation,
    root: Mounted<RootNavigator>,
    tab_bar: Mounted<TabBar>,
    home: Mounted<HomeScreen>,
    settings: Mounted<SettingsScreen>,
}

impl App {
    /// Start the shell, sampling the host preference named by `config`
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let source = config.host_preference.source();
        Self::with_source(config, source.as_ref())
    }

    /// Start the shell with an explicit host preference source
    pub fn with_source<S: ColorSchemeSource + ?Sized>(
        config: AppConfig,
        source: &S,
    ) -> Result<Self, AppError> {
        config.validate()?;

        let store = ThemeStore::from_host(source);
        let scope = ThemeScope::new(store.clone());
        let navigation: SharedNavigation =
            Arc::new(RwLock::new(NavigationState::new(config.initial_tab)));

        let root = Mounted::mount(RootNavigator, &scope)?;
        let tab_bar = Mounted::mount(TabBar::new(navigation.clone()), &scope)?;
        let home = Mounted::mount(HomeScreen::default(), &scope)?;
        let settings = Mounted::mount(SettingsScreen::default(), &scope)?;

        tracing::info!(
            mode = %store.get_mode(),
            tab = %config.initial_tab,
            "Hydrigo shell started"
        );

        Ok(App {
            config,
            store,
            scope,
            navigation,
            root,
            tab_bar,
            home,
            settings,
        })
    }

    /// Configuration the shell was started with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The application's theme store
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Scope providing the store to consumers
    pub fn scope(&self) -> &ThemeScope {
        &self.scope
    }

    /// Current theme mode
    pub fn theme_mode(&self) -> ThemeMode {
        self.store.get_mode()
    }

    /// Active tab
    pub fn active_tab(&self) -> Tab {
        self.navigation.read().active_tab()
    }

    /// Switch tabs. Returns false if `tab` was already active.
    pub fn switch_tab(&self, tab: Tab) -> Result<bool, AppError> {
        let changed = self.navigation.write().switch_tab(tab);
        if changed {
            self.tab_bar.refresh()?;
        }
        Ok(changed)
    }

    /// Flip the settings screen's dark mode switch
    pub fn set_dark_mode(&self, on: bool) -> Result<(), AppError> {
        self.settings.consumer().set_dark_mode(&self.scope, on)?;
        Ok(())
    }

    /// Toggle between light and dark
    pub fn toggle_theme(&self) -> Result<(), AppError> {
        self.settings.consumer().toggle_appearance(&self.scope)?;
        Ok(())
    }

    /// Mounted root navigator
    pub fn root(&self) -> &Mounted<RootNavigator> {
        &self.root
    }

    /// Mounted tab bar
    pub fn tab_bar(&self) -> &Mounted<TabBar> {
        &self.tab_bar
    }

    /// Mounted home screen
    pub fn home(&self) -> &Mounted<HomeScreen> {
        &self.home
    }

    /// Mounted settings screen
    pub fn settings(&self) -> &Mounted<SettingsScreen> {
        &self.settings
    }

    /// Latest rendered views for what is on screen
    pub fn frame(&self) -> Frame {
        let screen = match self.active_tab() {
            Tab::Home => ScreenView::Home(self.home.view()),
            Tab::Settings => ScreenView::Settings(self.settings.view()),
        };

        Frame {
            root: self.root.view(),
            tab_bar: self.tab_bar.view(),
            screen,
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.theme_mode())
            .field("tab", &self.active_tab())
            .finish_non_exhaustive()
    }
}
