//! Winner resolution: each treatment is compared against the canonical
//! control; the largest statistically significant positive improvement wins,
//! with control retained by default when no treatment clears the bar.

use serde::Serialize;

use crate::model::{canonical_control, Test, Variant};
use crate::significance::compare_variants;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WinnerSummary {
    pub variant_id: String,
    pub variant_name: String,
    pub is_control: bool,
    /// Relative lift over control in percent; 0 when control is retained.
    pub improvement: f64,
    /// (1 − p-value) × 100 of the winning comparison; 100 when control is
    /// retained by default.
    pub confidence: f64,
}

/// `None` when the test has no control variant. Ties on improvement are
/// broken by slice order (first seen wins). Absence of significant evidence
/// retains control as the declared winner.
pub fn determine_winner(test: &Test, variants: &[Variant]) -> Option<WinnerSummary> {
    let control = canonical_control(variants)?;

    let mut best: Option<(&Variant, f64, f64)> = None;
    let mut best_improvement = 0.0;

    for variant in variants.iter().filter(|v| !std::ptr::eq(*v, control)) {
        let result = compare_variants(control, variant, test.confidence_level);
        if result.is_significant && result.improvement > best_improvement {
            best_improvement = result.improvement;
            best = Some((variant, result.improvement, result.confidence));
        }
    }

    let summary = match best {
        Some((variant, improvement, confidence)) => {
            tracing::debug!(
                test_id = %test.id,
                winner = %variant.id,
                improvement,
                "treatment beats control"
            );
            WinnerSummary {
                variant_id: variant.id.clone(),
                variant_name: variant.name.clone(),
                is_control: false,
                improvement,
                confidence,
            }
        }
        None => WinnerSummary {
            variant_id: control.id.clone(),
            variant_name: control.name.clone(),
            is_control: true,
            improvement: 0.0,
            confidence: 100.0,
        },
    };
    Some(summary)
}
