//! Operator profile and settings content

use serde::Serialize;

/// The signed-in operator shown on the profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorProfile {
    /// Avatar initials
    pub initials: &'static str,
    /// Display name
    pub name: &'static str,
    /// Role
    pub role: &'static str,
    /// Node the operator supervises
    pub node_id: &'static str,
}

impl OperatorProfile {
    /// Meta line under the role
    pub fn meta_line(&self) -> String {
        format!("Node ID • {}", self.node_id)
    }
}

/// A navigable row in the controls card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    /// Row title
    pub title: &'static str,
    /// Row subtitle
    pub subtitle: &'static str,
}

/// Small label/value tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineStat {
    /// Tile label
    pub label: &'static str,
    /// Tile value
    pub value: &'static str,
}

/// Quick action tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    /// Action name
    pub label: &'static str,
    /// Current state or duration
    pub value: &'static str,
}

/// Operator profile
pub const OPERATOR: OperatorProfile = OperatorProfile {
    initials: "HO",
    name: "Hydrigo Operator",
    role: "IoT Supervisor",
    node_id: "HG-09",
};

/// Controls card rows
pub const FEATURES: [FeatureItem; 2] = [
    FeatureItem {
        title: "Pump alerts",
        subtitle: "Push + SMS when pressure drifts",
    },
    FeatureItem {
        title: "Maintenance reminder",
        subtitle: "Filter swap every 14 days",
    },
];

/// Inline stats under the controls
pub const INLINE_STATS: [InlineStat; 2] = [
    InlineStat { label: "Secure mode", value: "PIN enabled" },
    InlineStat { label: "Alerts", value: "3 active" },
];

/// Quick actions card
pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction { label: "Pause Pump", value: "3 min" },
    QuickAction { label: "Prime Line", value: "Ready" },
    QuickAction { label: "Sync IoT", value: "Now" },
];

/// Everything the settings tab shows apart from the appearance switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsContent {
    /// Profile card
    pub operator: OperatorProfile,
    /// Controls rows
    pub features: &'static [FeatureItem],
    /// Inline stats
    pub inline_stats: &'static [InlineStat],
    /// Quick actions
    pub quick_actions: &'static [QuickAction],
}

impl SettingsContent {
    /// The fixed settings content
    pub fn current() -> Self {
        SettingsContent {
            operator: OPERATOR,
            features: &FEATURES,
            inline_stats: &INLINE_STATS,
            quick_actions: &QUICK_ACTIONS,
        }
    }
}

impl Default for SettingsContent {
    fn default() -> Self {
        Self::current()
    }
}
