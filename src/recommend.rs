//! Heuristic advisory notes built from progress and significance state.
//! Pure list-builder; ordering follows the rule order below.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::model::{canonical_control, Test, Variant};
use crate::progress::Progress;
use crate::significance::{compare_variants, round2};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Progress,
    Duration,
    TrafficSplit,
    Completion,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub message: String,
}

/// Advisory entries for the current snapshot:
/// low progress, short runtime, incomplete traffic allocation, and
/// per-variant completion candidates once the test is essentially done.
pub fn recommend(
    test: &Test,
    variants: &[Variant],
    progress: &Progress,
    config: &EngineConfig,
) -> Vec<Recommendation> {
    let mut notes = Vec::new();

    if progress.percentage < config.low_progress_threshold_pct {
        notes.push(Recommendation {
            kind: RecommendationType::Progress,
            priority: Priority::Medium,
            message: format!(
                "Test has reached {:.0}% of its sample size target; keep it running to gather more data",
                progress.percentage
            ),
        });
    }

    if progress.days_running < config.minimum_days {
        notes.push(Recommendation {
            kind: RecommendationType::Duration,
            priority: Priority::High,
            message: format!(
                "Test has been running {} day(s); run at least {} to account for weekday/weekend variation",
                progress.days_running, config.minimum_days
            ),
        });
    }

    let total_split: f64 = variants.iter().map(|v| v.traffic_split).sum();
    if total_split < 100.0 {
        notes.push(Recommendation {
            kind: RecommendationType::TrafficSplit,
            priority: Priority::High,
            message: format!(
                "Traffic splits sum to {}%, leaving part of the audience unassigned",
                round2(total_split)
            ),
        });
    }

    if progress.percentage >= config.completion_threshold_pct {
        if let Some(control) = canonical_control(variants) {
            for variant in variants.iter().filter(|v| !std::ptr::eq(*v, control)) {
                let result = compare_variants(control, variant, test.confidence_level);
                if result.is_significant && result.improvement > 0.0 {
                    notes.push(Recommendation {
                        kind: RecommendationType::Completion,
                        priority: Priority::High,
                        message: format!(
                            "Variant {} is significantly outperforming control ({:.2}% lift); consider completing the test",
                            variant.name, result.improvement
                        ),
                    });
                }
            }
        }
    }

    notes
}
