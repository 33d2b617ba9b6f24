//! Two-proportion z-test between a control variant and a treatment variant.

use serde::Serialize;

use crate::model::Variant;
use crate::normal;

/// Outcome of comparing one treatment against control.
///
/// Fields are kept at full precision so downstream comparisons (winner
/// resolution) are exact; [`SignificanceResult::for_display`] produces the
/// 2-decimal copy used in exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignificanceResult {
    pub is_significant: bool,
    /// (1 − p-value) × 100.
    pub confidence: f64,
    pub z_score: f64,
    pub p_value: f64,
    /// Relative lift of the treatment over control, in percent.
    pub improvement: f64,
    /// Control conversion rate, in percent.
    pub control_rate: f64,
    /// Treatment conversion rate, in percent.
    pub variant_rate: f64,
}

impl SignificanceResult {
    /// Neutral result for arms that cannot be compared yet
    /// (an expected state of a live experiment, not an error).
    fn neutral(control_rate: f64, variant_rate: f64) -> Self {
        Self {
            is_significant: false,
            confidence: 0.0,
            z_score: 0.0,
            p_value: 1.0,
            improvement: 0.0,
            control_rate,
            variant_rate,
        }
    }

    /// Copy with every field rounded to 2 decimals, for report display.
    pub fn for_display(&self) -> Self {
        Self {
            is_significant: self.is_significant,
            confidence: round2(self.confidence),
            z_score: round2(self.z_score),
            p_value: round2(self.p_value),
            improvement: round2(self.improvement),
            control_rate: round2(self.control_rate),
            variant_rate: round2(self.variant_rate),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pooled two-proportion z-test with a two-tailed p-value.
///
/// `confidence_level` is a percentage (e.g. 95.0); significance is decided
/// against `alpha = (100 − confidence_level) / 100`. Either arm having zero
/// impressions yields the neutral result.
pub fn compare_variants(
    control: &Variant,
    variant: &Variant,
    confidence_level: f64,
) -> SignificanceResult {
    let p1 = control.conversion_rate();
    let p2 = variant.conversion_rate();

    if control.impressions == 0 || variant.impressions == 0 {
        return SignificanceResult::neutral(p1 * 100.0, p2 * 100.0);
    }

    let n1 = control.impressions as f64;
    let n2 = variant.impressions as f64;

    let pooled = (control.conversions + variant.conversions) as f64 / (n1 + n2);
    let se = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();

    let z_score = if se == 0.0 { 0.0 } else { (p2 - p1) / se };
    let p_value = 2.0 * (1.0 - normal::cdf(z_score.abs()));

    let alpha = (100.0 - confidence_level) / 100.0;
    let improvement = if p1 > 0.0 { (p2 - p1) / p1 * 100.0 } else { 0.0 };

    SignificanceResult {
        is_significant: p_value < alpha,
        confidence: (1.0 - p_value) * 100.0,
        z_score,
        p_value,
        improvement,
        control_rate: p1 * 100.0,
        variant_rate: p2 * 100.0,
    }
}
