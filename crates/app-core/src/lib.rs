//! Core application content for Hydrigo
//!
//! This crate holds the content the shell displays: branding, the pump
//! telemetry shown on the home tab and the operator data shown on the
//! settings tab. Every value is a fixed constant; there is no device link.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod operator;
pub mod telemetry;

pub use operator::{FeatureItem, InlineStat, OperatorProfile, QuickAction, SettingsContent};
pub use telemetry::{Dashboard, Metric, MetricKind, PumpStatus, SignalReading, TimelineEntry};
