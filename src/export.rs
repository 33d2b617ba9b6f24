//! Consolidated results report: test summary, progress, per-variant rows
//! with significance vs. control, winner, and recommendations. Pure
//! aggregation over the other modules — no side effects.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::model::{canonical_control, Test, TestStatus, Variant};
use crate::progress::{track_progress, Progress};
use crate::recommend::{recommend, Recommendation};
use crate::significance::{compare_variants, round2, SignificanceResult};
use crate::winner::{determine_winner, WinnerSummary};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    pub id: String,
    pub entity_type: String,
    pub status: TestStatus,
    pub confidence_level: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariantReport {
    pub id: String,
    pub name: String,
    pub is_control: bool,
    pub traffic_split: f64,
    pub impressions: u64,
    pub conversions: u64,
    /// Conversion rate in percent, rounded to 2 decimals for display.
    pub conversion_rate: f64,
    pub total_revenue: Option<f64>,
    /// `None` for the control row and when the test has no control.
    pub significance_vs_control: Option<SignificanceResult>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub test: TestSummary,
    pub progress: Progress,
    pub variants: Vec<VariantReport>,
    pub winner: Option<WinnerSummary>,
    pub recommendations: Vec<Recommendation>,
    pub exported_at: DateTime<Utc>,
}

/// Assembles the full report for one snapshot. Calling it twice on an
/// unchanged snapshot yields identical output except for `exported_at`.
pub fn export_results(
    test: &Test,
    variants: &[Variant],
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> ExportReport {
    let progress = track_progress(test, variants, now, config);
    let control = canonical_control(variants);

    let variant_reports = variants
        .iter()
        .map(|variant| {
            let significance_vs_control = control
                .filter(|control| !std::ptr::eq(*control, variant))
                .map(|control| {
                    compare_variants(control, variant, test.confidence_level).for_display()
                });
            VariantReport {
                id: variant.id.clone(),
                name: variant.name.clone(),
                is_control: variant.is_control,
                traffic_split: variant.traffic_split,
                impressions: variant.impressions,
                conversions: variant.conversions,
                conversion_rate: round2(variant.conversion_rate() * 100.0),
                total_revenue: variant.total_revenue,
                significance_vs_control,
            }
        })
        .collect();

    let winner = determine_winner(test, variants);
    let recommendations = recommend(test, variants, &progress, config);

    tracing::debug!(
        test_id = %test.id,
        variants = variants.len(),
        recommendations = recommendations.len(),
        "results report assembled"
    );

    ExportReport {
        test: TestSummary {
            id: test.id.clone(),
            entity_type: test.entity_type.clone(),
            status: test.status,
            confidence_level: test.confidence_level,
            start_date: test.start_date,
            end_date: test.end_date,
        },
        progress,
        variants: variant_reports,
        winner,
        recommendations,
        exported_at: now,
    }
}
