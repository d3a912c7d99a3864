//! Application screens
//!
//! Both screens render the fixed content from `app-core` into a view model
//! carrying every text element and the palette colors it is drawn with.
//! Layout is left to whatever draws the view.

use crate::mount::ThemeConsumer;
use crate::theme::{Color, Palette, ThemeMode, ThemeSnapshot};
use app_core::branding::colors::{BLACK, WHITE};
use app_core::{Dashboard, SettingsContent};
use app_state::{ThemeError, ThemeScope};
use serde::Serialize;

// =============================================================================
// View Primitives
// =============================================================================

/// Text and the color it is drawn in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledText {
    /// Content
    pub text: String,
    /// Foreground color
    pub color: Color,
}

impl StyledText {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// A bordered background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Surface {
    /// Fill color
    pub background: Color,
    /// Border color
    pub border: Color,
}

impl Surface {
    fn card(palette: &Palette) -> Self {
        Self {
            background: palette.surface,
            border: palette.border,
        }
    }

    fn inset(palette: &Palette) -> Self {
        Self {
            background: palette.background,
            border: palette.border,
        }
    }
}

/// Label over value, with an optional detail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Tile background, if it has one
    pub surface: Option<Surface>,
    /// Muted label
    pub label: StyledText,
    /// Emphasized value
    pub value: StyledText,
    /// Muted detail line
    pub detail: Option<StyledText>,
}

impl Tile {
    fn new(palette: &Palette, surface: Option<Surface>, label: &str, value: &str) -> Self {
        Self {
            surface,
            label: StyledText::new(label, palette.muted),
            value: StyledText::new(value, palette.text),
            detail: None,
        }
    }
}

/// Title and subtitle on the left, trailing text on the right, divider below
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Row title
    pub title: StyledText,
    /// Row subtitle
    pub subtitle: StyledText,
    /// Trailing text or glyph
    pub trailing: StyledText,
    /// Divider color
    pub divider: Color,
}

/// A titled card of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCard {
    /// Card background
    pub surface: Surface,
    /// Section title
    pub title: StyledText,
    /// Rows in order
    pub rows: Vec<Row>,
}

// =============================================================================
// Home Screen
// =============================================================================

/// Pump status card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCard {
    /// Card background
    pub surface: Surface,
    /// Pump name
    pub overline: StyledText,
    /// Running state
    pub state: StyledText,
    /// Control mode
    pub control_mode: StyledText,
    /// Heartbeat and uptime
    pub items: Vec<Tile>,
    /// Signal pills
    pub signals: Vec<Tile>,
}

/// Rendered home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Mode rendered with
    pub mode: ThemeMode,
    /// Screen background
    pub background: Color,
    /// Pump status card
    pub status: StatusCard,
    /// Title over the metrics grid
    pub metrics_title: StyledText,
    /// Metric cards
    pub metrics: Vec<Tile>,
    /// Environment timeline
    pub timeline: ListCard,
}

/// Pump dashboard screen
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    dashboard: Dashboard,
}

impl HomeScreen {
    /// Home screen over `dashboard`
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

impl ThemeConsumer for HomeScreen {
    type View = HomeView;
    const NAME: &'static str = "HomeScreen";

    fn render(&self, scope: &ThemeScope) -> Result<HomeView, ThemeError> {
        let ThemeSnapshot { mode, palette } = ThemeSnapshot::read(scope, Self::NAME)?;
        let pump = &self.dashboard.pump;

        let status = StatusCard {
            surface: Surface::card(palette),
            overline: StyledText::new(pump.label, palette.muted),
            state: StyledText::new(pump.state, palette.text),
            control_mode: StyledText::new(pump.mode, palette.text),
            items: vec![
                Tile::new(palette, None, "Heartbeat", pump.heartbeat),
                Tile::new(palette, None, "Uptime", pump.uptime),
            ],
            signals: self
                .dashboard
                .signals
                .iter()
                .map(|s| Tile::new(palette, Some(Surface::inset(palette)), s.label, s.value))
                .collect(),
        };

        let metrics = self
            .dashboard
            .metrics
            .iter()
            .map(|m| Tile {
                detail: Some(StyledText::new(m.detail, palette.muted)),
                ..Tile::new(palette, Some(Surface::card(palette)), m.title, m.value)
            })
            .collect();

        let timeline = ListCard {
            surface: Surface::card(palette),
            title: StyledText::new("Environment timeline", palette.text),
            rows: self
                .dashboard
                .timeline
                .iter()
                .map(|entry| Row {
                    title: StyledText::new(entry.title, palette.text),
                    subtitle: StyledText::new(entry.subtitle, palette.muted),
                    trailing: StyledText::new(entry.primary, palette.text),
                    divider: palette.border,
                })
                .collect(),
        };

        Ok(HomeView {
            mode,
            background: palette.background,
            status,
            metrics_title: StyledText::new("Live statistics", palette.text),
            metrics,
            timeline,
        })
    }
}

// =============================================================================
// Settings Screen
// =============================================================================

/// Operator profile card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// Card background
    pub surface: Surface,
    /// Avatar circle
    pub avatar: Surface,
    /// Avatar initials
    pub initials: StyledText,
    /// Operator name
    pub name: StyledText,
    /// Operator role
    pub role: StyledText,
    /// Node line
    pub meta: StyledText,
}

/// On/off switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwitchView {
    /// Whether the switch is on
    pub on: bool,
    /// Thumb color
    pub thumb: Color,
    /// Track color for the current position
    pub track: Color,
}

/// Appearance card holding the dark mode switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppearanceCard {
    /// Card background
    pub surface: Surface,
    /// Section title
    pub title: StyledText,
    /// Switch label
    pub label: StyledText,
    /// Switch description
    pub description: StyledText,
    /// Dark mode switch, on when dark
    pub dark_mode: SwitchView,
}

/// Controls card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsCard {
    /// Feature rows
    pub list: ListCard,
    /// Inline stats below the rows
    pub stats: Vec<Tile>,
}

/// Quick actions card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickActionsCard {
    /// Card background
    pub surface: Surface,
    /// Section title
    pub title: StyledText,
    /// Action tiles
    pub actions: Vec<Tile>,
}

/// Rendered settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    /// Mode rendered with
    pub mode: ThemeMode,
    /// Screen background
    pub background: Color,
    /// Profile card
    pub profile: ProfileCard,
    /// Appearance card
    pub appearance: AppearanceCard,
    /// Controls card
    pub controls: ControlsCard,
    /// Quick actions card
    pub quick_actions: QuickActionsCard,
}

const SWITCH_TRACK_OFF: Color = "rgba(0,0,0,0.2)";
const SWITCH_TRACK_ON: Color = "rgba(255,255,255,0.3)";

/// Account and settings screen
///
/// The only consumer that writes the theme: its dark mode switch.
#[derive(Debug, Clone, Default)]
pub struct SettingsScreen {
    content: SettingsContent,
}

impl SettingsScreen {
    /// Settings screen over `content`
    pub fn new(content: SettingsContent) -> Self {
        Self { content }
    }

    /// Handle the dark mode switch: on selects dark, off selects light
    pub fn set_dark_mode(&self, scope: &ThemeScope, on: bool) -> Result<(), ThemeError> {
        let mode = if on { ThemeMode::Dark } else { ThemeMode::Light };
        scope.store(Self::NAME)?.set_mode(mode);
        Ok(())
    }

    /// Flip the theme
    pub fn toggle_appearance(&self, scope: &ThemeScope) -> Result<(), ThemeError> {
        scope.store(Self::NAME)?.toggle_mode();
        Ok(())
    }
}

impl ThemeConsumer for SettingsScreen {
    type View = SettingsView;
    const NAME: &'static str = "SettingsScreen";

    fn render(&self, scope: &ThemeScope) -> Result<SettingsView, ThemeError> {
        let ThemeSnapshot { mode, palette } = ThemeSnapshot::read(scope, Self::NAME)?;
        let operator = &self.content.operator;
        let is_dark = mode.is_dark();

        let profile = ProfileCard {
            surface: Surface::card(palette),
            avatar: Surface::inset(palette),
            initials: StyledText::new(operator.initials, palette.text),
            name: StyledText::new(operator.name, palette.text),
            role: StyledText::new(operator.role, palette.muted),
            meta: StyledText::new(operator.meta_line(), palette.muted),
        };

        let appearance = AppearanceCard {
            surface: Surface::card(palette),
            title: StyledText::new("Appearance", palette.text),
            label: StyledText::new("Dark mode", palette.text),
            description: StyledText::new("Switch between black & white palettes", palette.muted),
            dark_mode: SwitchView {
                on: is_dark,
                thumb: if is_dark { WHITE } else { BLACK },
                track: if is_dark { SWITCH_TRACK_ON } else { SWITCH_TRACK_OFF },
            },
        };

        let controls = ControlsCard {
            list: ListCard {
                surface: Surface::card(palette),
                title: StyledText::new("Controls", palette.text),
                rows: self
                    .content
                    .features
                    .iter()
                    .map(|f| Row {
                        title: StyledText::new(f.title, palette.text),
                        subtitle: StyledText::new(f.subtitle, palette.muted),
                        trailing: StyledText::new("›", palette.text),
                        divider: palette.border,
                    })
                    .collect(),
            },
            stats: self
                .content
                .inline_stats
                .iter()
                .map(|s| Tile::new(palette, Some(Surface::card(palette)), s.label, s.value))
                .collect(),
        };

        let quick_actions = QuickActionsCard {
            surface: Surface::card(palette),
            title: StyledText::new("Quick actions", palette.text),
            actions: self
                .content
                .quick_actions
                .iter()
                .map(|a| Tile::new(palette, Some(Surface::card(palette)), a.label, a.value))
                .collect(),
        };

        Ok(SettingsView {
            mode,
            background: palette.background,
            profile,
            appearance,
            controls,
            quick_actions,
        })
    }
}
