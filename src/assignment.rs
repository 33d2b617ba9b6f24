//! Deterministic, stateless bucketing of a (test, subject) pair into one
//! variant via consistent hashing over cumulative traffic-split ranges.
//!
//! A hash is used instead of randomness so that repeat visits by the same
//! subject lock to the same arm: the same `(test.id, subject_id)` always
//! yields the same variant as long as variant composition and order are
//! unchanged.

use crate::model::{Test, TestStatus, Variant};

/// Maps a `(test, subject)` pair onto the variants' cumulative traffic-split
/// ranges. Returns `None` when the test is not running or there are no
/// variants to assign into.
pub fn select_variant<'a>(
    test: &Test,
    variants: &'a [Variant],
    subject_id: &str,
) -> Option<&'a Variant> {
    if test.status != TestStatus::Running || variants.is_empty() {
        return None;
    }
    let point = bucket_point(&test.id, subject_id);
    variant_at_point(variants, point)
}

/// Normalized hash position in [0, 100) for a `(test, subject)` pair.
pub fn bucket_point(test_id: &str, subject_id: &str) -> f64 {
    let key = format!("{}:{}", test_id, subject_id);
    let hash = crc32fast::hash(key.as_bytes());
    hash as f64 / u32::MAX as f64 * 100.0
}

/// Cumulative-split walk, in slice order: the first variant whose running
/// traffic-split sum reaches `point` wins. If the splits sum below 100 (or
/// floating error leaves the point uncovered), falls back to the first
/// variant in the order.
pub fn variant_at_point(variants: &[Variant], point: f64) -> Option<&Variant> {
    let mut cumulative = 0.0;
    for variant in variants {
        cumulative += variant.traffic_split;
        if cumulative >= point {
            return Some(variant);
        }
    }
    variants.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestStatus;

    fn test_with_status(status: TestStatus) -> Test {
        Test {
            id: "test-experiment-id".to_string(),
            entity_type: "campaign".to_string(),
            status,
            confidence_level: 95.0,
            sample_size_target: None,
            start_date: None,
            end_date: None,
        }
    }

    fn variants_with_splits(splits: &[f64]) -> Vec<Variant> {
        splits
            .iter()
            .enumerate()
            .map(|(i, &split)| Variant {
                id: format!("v{}", i),
                test_id: "test-experiment-id".to_string(),
                name: format!("variant-{}", i),
                is_control: i == 0,
                traffic_split: split,
                impressions: 0,
                conversions: 0,
                total_revenue: None,
            })
            .collect()
    }

    #[test]
    fn assignment_is_deterministic_for_same_inputs() {
        let test = test_with_status(TestStatus::Running);
        let variants = variants_with_splits(&[50.0, 50.0]);
        let first = select_variant(&test, &variants, "user-42").unwrap().id.clone();
        for _ in 0..10 {
            let again = select_variant(&test, &variants, "user-42").unwrap();
            assert_eq!(again.id, first);
        }
    }

    #[test]
    fn non_running_test_assigns_nothing() {
        let variants = variants_with_splits(&[50.0, 50.0]);
        for status in [TestStatus::Draft, TestStatus::Completed, TestStatus::Stopped] {
            let test = test_with_status(status);
            assert!(select_variant(&test, &variants, "user-42").is_none());
        }
    }

    #[test]
    fn empty_variant_list_assigns_nothing() {
        let test = test_with_status(TestStatus::Running);
        assert!(select_variant(&test, &[], "user-42").is_none());
    }

    #[test]
    fn point_65_with_splits_50_30_20_selects_second_variant() {
        let variants = variants_with_splits(&[50.0, 30.0, 20.0]);
        // Cumulative sums 50, 80, 100 — 65 lands in the second range.
        let picked = variant_at_point(&variants, 65.0).unwrap();
        assert_eq!(picked.id, "v1");
    }

    #[test]
    fn point_on_boundary_selects_earlier_variant() {
        let variants = variants_with_splits(&[50.0, 30.0, 20.0]);
        // cumulative >= point, so exactly 50 still belongs to the first range
        let picked = variant_at_point(&variants, 50.0).unwrap();
        assert_eq!(picked.id, "v0");
    }

    #[test]
    fn point_zero_selects_first_variant() {
        let variants = variants_with_splits(&[50.0, 50.0]);
        assert_eq!(variant_at_point(&variants, 0.0).unwrap().id, "v0");
    }

    #[test]
    fn exhausted_splits_fall_back_to_first_variant() {
        // Splits sum to 60; a point above that is uncovered.
        let variants = variants_with_splits(&[30.0, 30.0]);
        let picked = variant_at_point(&variants, 90.0).unwrap();
        assert_eq!(picked.id, "v0");
    }

    #[test]
    fn different_subjects_can_get_different_variants() {
        let test = test_with_status(TestStatus::Running);
        let variants = variants_with_splits(&[50.0, 50.0]);
        let ids: Vec<String> = (0..100)
            .map(|i| {
                select_variant(&test, &variants, &format!("user-{}", i))
                    .unwrap()
                    .id
                    .clone()
            })
            .collect();
        let second_count = ids.iter().filter(|id| *id == "v1").count();
        assert!(second_count > 0);
        assert!(second_count < 100);
    }

    #[test]
    fn assignment_changes_when_test_id_changes() {
        let mut test_a = test_with_status(TestStatus::Running);
        let mut test_b = test_with_status(TestStatus::Running);
        test_a.id = "experiment-aaa".to_string();
        test_b.id = "experiment-bbb".to_string();
        let variants = variants_with_splits(&[50.0, 50.0]);
        let differs = (0..1000).any(|i| {
            let subject = format!("user-{}", i);
            select_variant(&test_a, &variants, &subject).unwrap().id
                != select_variant(&test_b, &variants, &subject).unwrap().id
        });
        assert!(differs, "assignments should vary between tests");
    }

    #[test]
    fn bucket_point_stays_in_range() {
        for i in 0..1000 {
            let point = bucket_point("t", &format!("subject-{}", i));
            assert!((0.0..=100.0).contains(&point), "point={}", point);
        }
    }
}
