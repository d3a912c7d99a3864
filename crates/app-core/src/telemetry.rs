//! Pump telemetry shown on the home tab
//!
//! The shell is not connected to a device. These are the fixed readings the
//! dashboard displays.

use serde::Serialize;

/// Status of the monitored pump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PumpStatus {
    /// Pump name
    pub label: &'static str,
    /// Running state
    pub state: &'static str,
    /// Control mode
    pub mode: &'static str,
    /// Time since the last heartbeat
    pub heartbeat: &'static str,
    /// Uptime since last start
    pub uptime: &'static str,
}

/// Kind of live metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Ambient humidity
    Humidity,
    /// Reservoir fill level
    WaterLevel,
    /// Outlet flow rate
    FlowRate,
    /// Line pressure
    Pressure,
    /// Pump casing temperature
    Temperature,
    /// Total dissolved solids (water quality)
    Tds,
}

/// One live metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// What is measured
    pub kind: MetricKind,
    /// Card title
    pub title: &'static str,
    /// Formatted reading
    pub value: &'static str,
    /// Where the reading comes from
    pub detail: &'static str,
}

/// A compact signal readout on the status card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalReading {
    /// Signal name
    pub label: &'static str,
    /// Formatted value
    pub value: &'static str,
}

/// A row in the environment timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// Row title
    pub title: &'static str,
    /// Emphasized value on the right
    pub primary: &'static str,
    /// Secondary line under the title
    pub subtitle: &'static str,
}

/// Pump status card contents
pub const PUMP_STATUS: PumpStatus = PumpStatus {
    label: "Water Pump Alpha",
    state: "Running",
    mode: "Automatic mode",
    heartbeat: "2 min ago",
    uptime: "36h 12m",
};

/// Signal pills under the pump status
pub const SIGNALS: [SignalReading; 3] = [
    SignalReading { label: "IoT Node", value: "HG-09 Sync" },
    SignalReading { label: "Battery", value: "91% • Stable" },
    SignalReading { label: "Valve", value: "Zone 3 open" },
];

/// Live statistics grid
pub const METRICS: [Metric; 6] = [
    Metric {
        kind: MetricKind::Humidity,
        title: "Humidity",
        value: "68%",
        detail: "Greenhouse ambient",
    },
    Metric {
        kind: MetricKind::WaterLevel,
        title: "Water level",
        value: "75%",
        detail: "Reservoir capacity",
    },
    Metric {
        kind: MetricKind::FlowRate,
        title: "Flow rate",
        value: "42 L/min",
        detail: "Outlet velocity",
    },
    Metric {
        kind: MetricKind::Pressure,
        title: "Pressure",
        value: "1.3 bar",
        detail: "Line pressure",
    },
    Metric {
        kind: MetricKind::Temperature,
        title: "Temperature",
        value: "26°C",
        detail: "Pump casing",
    },
    Metric {
        kind: MetricKind::Tds,
        title: "TDS",
        value: "320 ppm",
        detail: "Water quality",
    },
];

/// Environment timeline rows
pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        title: "Soil moisture",
        primary: "54%",
        subtitle: "Irrigation in 18 min",
    },
    TimelineEntry {
        title: "Reservoir refresh",
        primary: "Next cycle 22:00",
        subtitle: "Pump schedule synced",
    },
    TimelineEntry {
        title: "Last maintenance",
        primary: "12 days ago",
        subtitle: "Filter swap not required",
    },
];

/// Everything the home tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Pump status card
    pub pump: PumpStatus,
    /// Signal pills
    pub signals: &'static [SignalReading],
    /// Live statistics
    pub metrics: &'static [Metric],
    /// Environment timeline
    pub timeline: &'static [TimelineEntry],
}

impl Dashboard {
    /// The fixed dashboard
    pub fn current() -> Self {
        Dashboard {
            pump: PUMP_STATUS,
            signals: &SIGNALS,
            metrics: &METRICS,
            timeline: &TIMELINE,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pump_status() {
        let dashboard = Dashboard::current();
        assert_eq!(dashboard.pump.label, "Water Pump Alpha");
        assert_eq!(dashboard.pump.state, "Running");
        assert_eq!(dashboard.pump.heartbeat, "2 min ago");
    }

    #[test]
    fn test_every_metric_kind_present_once() {
        let dashboard = Dashboard::current();
        let kinds = [
            MetricKind::Humidity,
            MetricKind::WaterLevel,
            MetricKind::FlowRate,
            MetricKind::Pressure,
            MetricKind::Temperature,
            MetricKind::Tds,
        ];

        for kind in kinds {
            let count = dashboard.metrics.iter().filter(|m| m.kind == kind).count();
            assert_eq!(count, 1, "{:?} should appear exactly once", kind);
        }
        assert_eq!(dashboard.metrics.len(), kinds.len());
    }

    #[test]
    fn test_metric_values() {
        let dashboard = Dashboard::current();
        assert_eq!(dashboard.metrics[2].kind, MetricKind::FlowRate);
        assert_eq!(dashboard.metrics[2].value, "42 L/min");
        assert_eq!(dashboard.metrics[5].detail, "Water quality");
    }

    #[test]
    fn test_signals_and_timeline() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.signals.len(), 3);
        assert_eq!(dashboard.signals[0].value, "HG-09 Sync");
        assert_eq!(dashboard.timeline.len(), 3);
        assert_eq!(dashboard.timeline[1].primary, "Next cycle 22:00");
    }

    #[test]
    fn test_dashboard_serialization() {
        let json = serde_json::to_value(Dashboard::current()).unwrap();
        assert_eq!(json["pump"]["uptime"], "36h 12m");
        assert_eq!(json["metrics"][0]["kind"], "humidity");
        assert_eq!(json["metrics"][1]["kind"], "water_level");
    }
}
