//! Input snapshot types for the decision engine.
//!
//! `Test` and `Variant` are read-only snapshots supplied by the caller
//! (the experiment-management layer owns creation and counter increments).
//! The engine never mutates them. Slice order of variants is part of the
//! contract: cumulative bucketing and first-seen tie-breaks depend on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Draft,
    Running,
    Completed,
    Stopped,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub id: String,
    /// What is being tested, e.g. "campaign".
    pub entity_type: String,
    pub status: TestStatus,
    /// Percentage, e.g. 95.0.
    pub confidence_level: f64,
    /// Per-test global sample-size goal. Defaults apply when unset.
    pub sample_size_target: Option<u64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub test_id: String,
    pub name: String,
    pub is_control: bool,
    /// Share of traffic in [0, 100]. Splits across a test should sum to 100;
    /// the engine does not enforce this (caller invariant, with a defined
    /// assignment fallback and a recommendation when violated).
    pub traffic_split: f64,
    pub impressions: u64,
    pub conversions: u64,
    pub total_revenue: Option<f64>,
}

impl Variant {
    /// Observed conversion rate as a proportion in [0, 1].
    /// Zero when the variant has no impressions yet.
    pub fn conversion_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.conversions as f64 / self.impressions as f64
        }
    }
}

/// First variant flagged as control, in slice order.
/// Later `is_control` variants (a caller-side inconsistency) are treated as
/// treatments.
pub fn canonical_control(variants: &[Variant]) -> Option<&Variant> {
    variants.iter().find(|v| v.is_control)
}
