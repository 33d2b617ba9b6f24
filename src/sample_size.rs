//! Two-proportion power analysis: minimum per-variant sample size needed to
//! detect a given relative minimum detectable effect (MDE).

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::normal;

/// Per-variant sample size to detect `minimum_detectable_effect_pct`
/// (relative lift on `baseline_rate_pct`) at the given two-tailed confidence
/// level and power, all expressed as percentages. Confidence and power left
/// unset fall back to the configured defaults (95 and 80).
///
/// Degenerate effect sizes (p2 == p1) return the configured fixed fallback;
/// the result is floored at the configured minimum so the engine never
/// recommends a sample too small to be meaningful. Out-of-range
/// confidence/power are caller contract violations and fail fast.
pub fn estimate_sample_size(
    baseline_rate_pct: f64,
    minimum_detectable_effect_pct: f64,
    confidence_level_pct: Option<f64>,
    power_pct: Option<f64>,
    config: &EngineConfig,
) -> Result<u64, EngineError> {
    let confidence_level_pct = confidence_level_pct.unwrap_or(config.default_confidence_level);
    let power_pct = power_pct.unwrap_or(config.default_power);

    if confidence_level_pct <= 0.0 || confidence_level_pct >= 100.0 {
        return Err(EngineError::InvalidConfidenceLevel(confidence_level_pct));
    }
    if power_pct <= 0.0 || power_pct >= 100.0 {
        return Err(EngineError::InvalidPower(power_pct));
    }

    let p1 = baseline_rate_pct / 100.0;
    let p2 = p1 * (1.0 + minimum_detectable_effect_pct / 100.0);
    let delta = p2 - p1;

    if delta == 0.0 {
        return Ok(config.degenerate_sample_size);
    }

    // Two-tailed alpha/2 upper quantile and power quantile.
    let z_alpha = normal::inverse_cdf(1.0 - (100.0 - confidence_level_pct) / 200.0);
    let z_beta = normal::inverse_cdf(power_pct / 100.0);

    let variance = p1 * (1.0 - p1) + p2 * (1.0 - p2);
    let n = ((z_alpha + z_beta).powi(2) * variance / delta.powi(2)).ceil() as u64;

    Ok(n.max(config.minimum_sample_size))
}
