//! Experiment progress: accumulated impressions against the sample-size
//! target, plus elapsed/remaining duration.
//!
//! `now` is always an explicit parameter so the tracker stays a pure function
//! of its inputs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::model::{Test, Variant};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_impressions: u64,
    /// The test's target, or the configured default when unset.
    pub target_sample_size: u64,
    /// Completion in [0, 100].
    pub percentage: f64,
    /// Whole days since the start date; 0 when no start date is set.
    pub days_running: i64,
    /// Whole days until the end date, floored at 0. `None` unless both
    /// start and end dates are set.
    pub days_remaining: Option<i64>,
    pub is_ready_for_completion: bool,
}

pub fn track_progress(
    test: &Test,
    variants: &[Variant],
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> Progress {
    let total_impressions: u64 = variants.iter().map(|v| v.impressions).sum();
    let target_sample_size = test
        .sample_size_target
        .unwrap_or(config.default_sample_size_target);

    let percentage = if target_sample_size == 0 {
        0.0
    } else {
        (total_impressions as f64 / target_sample_size as f64 * 100.0).min(100.0)
    };

    let days_running = test
        .start_date
        .map(|start| (now - start).num_days().max(0))
        .unwrap_or(0);

    let days_remaining = match (test.start_date, test.end_date) {
        (Some(_), Some(end)) => Some((end - now).num_days().max(0)),
        _ => None,
    };

    Progress {
        total_impressions,
        target_sample_size,
        percentage,
        days_running,
        days_remaining,
        is_ready_for_completion: percentage >= config.completion_threshold_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestStatus;
    use chrono::TimeZone;

    fn test_snapshot(target: Option<u64>) -> Test {
        Test {
            id: "t1".to_string(),
            entity_type: "campaign".to_string(),
            status: TestStatus::Running,
            confidence_level: 95.0,
            sample_size_target: target,
            start_date: None,
            end_date: None,
        }
    }

    fn arm(impressions: u64) -> Variant {
        Variant {
            id: "v".to_string(),
            test_id: "t1".to_string(),
            name: "v".to_string(),
            is_control: false,
            traffic_split: 50.0,
            impressions,
            conversions: 0,
            total_revenue: None,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn percentage_reflects_impressions_against_target() {
        let test = test_snapshot(Some(2000));
        let progress = track_progress(
            &test,
            &[arm(600), arm(400)],
            at(2026, 8, 24),
            &EngineConfig::default(),
        );
        assert_eq!(progress.total_impressions, 1000);
        assert_eq!(progress.target_sample_size, 2000);
        assert!((progress.percentage - 50.0).abs() < 1e-9);
        assert!(!progress.is_ready_for_completion);
    }

    #[test]
    fn percentage_is_capped_at_100() {
        let test = test_snapshot(Some(500));
        let progress = track_progress(&test, &[arm(2000)], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_ready_for_completion);
    }

    #[test]
    fn unset_target_falls_back_to_configured_default() {
        let test = test_snapshot(None);
        let progress = track_progress(&test, &[arm(950)], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.target_sample_size, 1000);
        assert!((progress.percentage - 95.0).abs() < 1e-9);
        assert!(progress.is_ready_for_completion);
    }

    #[test]
    fn zero_target_yields_zero_percentage() {
        let test = test_snapshot(Some(0));
        let progress = track_progress(&test, &[arm(500)], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.is_ready_for_completion);
    }

    #[test]
    fn days_running_counts_from_start_date() {
        let mut test = test_snapshot(None);
        test.start_date = Some(at(2026, 8, 10));
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.days_running, 14);
    }

    #[test]
    fn days_running_is_zero_without_start_date() {
        let test = test_snapshot(None);
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.days_running, 0);
    }

    #[test]
    fn future_start_date_clamps_days_running_to_zero() {
        let mut test = test_snapshot(None);
        test.start_date = Some(at(2026, 9, 1));
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.days_running, 0);
    }

    #[test]
    fn days_remaining_requires_both_dates() {
        let mut test = test_snapshot(None);
        test.end_date = Some(at(2026, 9, 1));
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.days_remaining, None);

        test.start_date = Some(at(2026, 8, 10));
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.days_remaining, Some(8));
    }

    #[test]
    fn past_end_date_clamps_days_remaining_to_zero() {
        let mut test = test_snapshot(None);
        test.start_date = Some(at(2026, 8, 1));
        test.end_date = Some(at(2026, 8, 10));
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.days_remaining, Some(0));
    }

    #[test]
    fn empty_variant_list_reports_zero_impressions() {
        let test = test_snapshot(Some(1000));
        let progress = track_progress(&test, &[], at(2026, 8, 24), &EngineConfig::default());
        assert_eq!(progress.total_impressions, 0);
        assert_eq!(progress.percentage, 0.0);
    }
}
