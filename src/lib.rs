//! A/B test statistical decision engine.
//!
//! Pure, stateless functions over caller-supplied experiment snapshots:
//! deterministic variant bucketing, two-proportion z-tests, sample-size
//! estimation, progress tracking, winner resolution, and a consolidated
//! results report. Persistence, transport, and experiment lifecycle are the
//! caller's concern — every operation here is a function of the snapshot it
//! is handed (plus an explicit `now` where duration math occurs).
//!
//! ```
//! use chrono::Utc;
//! use liftgate::{
//!     export_results, select_variant, EngineConfig, Test, TestStatus, Variant,
//! };
//!
//! let test = Test {
//!     id: "hero-banner".to_string(),
//!     entity_type: "campaign".to_string(),
//!     status: TestStatus::Running,
//!     confidence_level: 95.0,
//!     sample_size_target: Some(2000),
//!     start_date: None,
//!     end_date: None,
//! };
//! let variants = vec![
//!     Variant {
//!         id: "a".to_string(),
//!         test_id: test.id.clone(),
//!         name: "control".to_string(),
//!         is_control: true,
//!         traffic_split: 50.0,
//!         impressions: 1000,
//!         conversions: 50,
//!         total_revenue: None,
//!     },
//!     Variant {
//!         id: "b".to_string(),
//!         test_id: test.id.clone(),
//!         name: "new-copy".to_string(),
//!         is_control: false,
//!         traffic_split: 50.0,
//!         impressions: 1000,
//!         conversions: 90,
//!         total_revenue: None,
//!     },
//! ];
//!
//! let assigned = select_variant(&test, &variants, "user-42").unwrap();
//! assert!(assigned.id == "a" || assigned.id == "b");
//!
//! let report = export_results(&test, &variants, Utc::now(), &EngineConfig::default());
//! assert_eq!(report.winner.unwrap().variant_id, "b");
//! ```

pub mod assignment;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod normal;
pub mod progress;
pub mod recommend;
pub mod sample_size;
pub mod significance;
pub mod winner;

pub use assignment::select_variant;
pub use config::EngineConfig;
pub use error::EngineError;
pub use export::{export_results, ExportReport, TestSummary, VariantReport};
pub use model::{canonical_control, Test, TestStatus, Variant};
pub use progress::{track_progress, Progress};
pub use recommend::{recommend, Priority, Recommendation, RecommendationType};
pub use sample_size::estimate_sample_size;
pub use significance::{compare_variants, SignificanceResult};
pub use winner::{determine_winner, WinnerSummary};
