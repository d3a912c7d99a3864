//! Navigation shell for Hydrigo
//!
//! The shell has two tabs and no deeper stacks. [`NavigationState`] tracks
//! the active tab; [`TabBar`] and [`RootNavigator`] are the theme consumers
//! that draw the chrome around the screens.

use crate::mount::ThemeConsumer;
use crate::theme::{
    navigation_theme, status_bar_style, Color, NavigationTheme, StatusBarStyle, ThemeMode,
    ThemeSnapshot,
};
use app_state::{ThemeError, ThemeScope};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Tabs
// =============================================================================

/// Bottom tab bar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Pump dashboard
    #[default]
    Home,
    /// Account and settings
    Settings,
}

impl Tab {
    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Hydrigo Home",
            Tab::Settings => "Account & Settings",
        }
    }

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Settings => "Settings",
        }
    }

    /// Tab bar icon name
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "house.fill",
            Tab::Settings => "gearshape.fill",
        }
    }

    /// Route path
    pub fn path(&self) -> &'static str {
        match self {
            Tab::Home => "/",
            Tab::Settings => "/settings",
        }
    }

    /// All tabs in display order
    pub fn all() -> [Tab; 2] {
        [Tab::Home, Tab::Settings]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Which tab is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    active: Tab,
}

impl NavigationState {
    /// Create navigation state starting on `tab`
    pub fn new(tab: Tab) -> Self {
        Self { active: tab }
    }

    /// The active tab
    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Switch to `tab`. Returns false if it was already active.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = %self.active, to = %tab, "Switching tab");
        self.active = tab;
        true
    }
}

/// Navigation state shared between the shell and the tab bar
pub type SharedNavigation = Arc<RwLock<NavigationState>>;

// =============================================================================
// Tab Bar
// =============================================================================

/// One rendered tab bar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItemView {
    /// Which tab
    pub tab: Tab,
    /// Label under the icon
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Route the entry links to
    pub path: &'static str,
    /// Icon and label color
    pub color: Color,
    /// Whether this is the active tab
    pub active: bool,
}

/// Rendered tab bar and header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBarView {
    /// Mode rendered with
    pub mode: ThemeMode,
    /// Header title of the active tab
    pub header_title: &'static str,
    /// Header background
    pub header_background: Color,
    /// Header text and button color
    pub header_tint: Color,
    /// Tab bar background
    pub background: Color,
    /// Tab bar top border
    pub border: Color,
    /// Entries in display order
    pub items: Vec<TabItemView>,
}

/// Bottom tab bar and header chrome
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    navigation: SharedNavigation,
}

impl TabBar {
    /// Tab bar over shared navigation state
    pub fn new(navigation: SharedNavigation) -> Self {
        Self { navigation }
    }

    /// The navigation state this bar reflects
    pub fn navigation(&self) -> &SharedNavigation {
        &self.navigation
    }
}

impl ThemeConsumer for TabBar {
    type View = TabBarView;
    const NAME: &'static str = "TabBar";

    fn render(&self, scope: &ThemeScope) -> Result<TabBarView, ThemeError> {
        let ThemeSnapshot { mode, palette } = ThemeSnapshot::read(scope, Self::NAME)?;
        let active = self.navigation.read().active_tab();

        let items = Tab::all()
            .into_iter()
            .map(|tab| TabItemView {
                tab,
                label: tab.label(),
                icon: tab.icon(),
                path: tab.path(),
                color: if tab == active {
                    palette.tint
                } else {
                    palette.tab_icon_default
                },
                active: tab == active,
            })
            .collect();

        Ok(TabBarView {
            mode,
            header_title: active.title(),
            header_background: palette.background,
            header_tint: palette.text,
            background: palette.background,
            border: palette.border,
            items,
        })
    }
}

// =============================================================================
// Root Navigator
// =============================================================================

/// Rendered root navigation container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootView {
    /// Mode rendered with
    pub mode: ThemeMode,
    /// Navigation container colors
    pub navigation: &'static NavigationTheme,
    /// Status bar content style
    pub status_bar: StatusBarStyle,
}

/// Root navigation container: navigation theme and status bar
#[derive(Debug, Clone, Copy, Default)]
pub struct RootNavigator;

impl ThemeConsumer for RootNavigator {
    type View = RootView;
    const NAME: &'static str = "RootNavigator";

    fn render(&self, scope: &ThemeScope) -> Result<RootView, ThemeError> {
        let mode = scope.mode(Self::NAME)?;
        Ok(RootView {
            mode,
            navigation: navigation_theme(mode),
            status_bar: status_bar_style(mode),
        })
    }
}
