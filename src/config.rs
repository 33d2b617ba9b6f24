//! Engine thresholds and defaults as an explicit configuration struct, so
//! callers and tests can vary confidence, power, and readiness cutoffs
//! without touching engine code.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Percentage, applied by sample-size estimation when the caller leaves
    /// the confidence level unset. Default 95.
    pub default_confidence_level: f64,
    /// Percentage (1 − false-negative rate), applied when the caller leaves
    /// power unset. Default 80.
    pub default_power: f64,
    /// Target impressions used by progress tracking when the test has no
    /// `sample_size_target`. Default 1000.
    pub default_sample_size_target: u64,
    /// Floor for sample size estimates — never recommend fewer samples
    /// per variant than this. Default 100.
    pub minimum_sample_size: u64,
    /// Fixed estimate returned when the detectable effect is degenerate
    /// (p2 == p1). Default 1000.
    pub degenerate_sample_size: u64,
    /// Progress percentage at which a test is considered ready to complete.
    /// Default 95.
    pub completion_threshold_pct: f64,
    /// Progress percentage below which a "keep running" note is emitted.
    /// Default 50.
    pub low_progress_threshold_pct: f64,
    /// Minimum days a test should run before reading results, guarding
    /// against weekday/weekend skew. Default 7.
    pub minimum_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_confidence_level: 95.0,
            default_power: 80.0,
            default_sample_size_target: 1000,
            minimum_sample_size: 100,
            degenerate_sample_size: 1000,
            completion_threshold_pct: 95.0,
            low_progress_threshold_pct: 50.0,
            minimum_days: 7,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.default_confidence_level <= 0.0 || self.default_confidence_level >= 100.0 {
            return Err(EngineError::InvalidConfidenceLevel(
                self.default_confidence_level,
            ));
        }
        if self.default_power <= 0.0 || self.default_power >= 100.0 {
            return Err(EngineError::InvalidPower(self.default_power));
        }
        if self.completion_threshold_pct <= 0.0 || self.completion_threshold_pct > 100.0 {
            return Err(EngineError::InvalidConfig(
                "completionThresholdPct must be in (0, 100]".to_string(),
            ));
        }
        if self.minimum_days < 0 {
            return Err(EngineError::InvalidConfig(
                "minimumDays must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
