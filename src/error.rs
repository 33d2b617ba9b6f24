use thiserror::Error;

/// Caller-contract violations only. Data-driven edge states (zero counters,
/// empty variant lists, missing control) never error — those paths return
/// neutral values or `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("confidence level must be in (0, 100) exclusive, got {0}")]
    InvalidConfidenceLevel(f64),

    #[error("statistical power must be in (0, 100) exclusive, got {0}")]
    InvalidPower(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
