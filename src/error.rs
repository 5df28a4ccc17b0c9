//! Input errors raised by the decision pipeline.
use thiserror::Error;

/// A call into the pipeline with inputs it cannot decide on.
///
/// The pipeline never recovers from these; callers are expected to collect
/// complete inputs before asking for a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("expected {expected} risk dimension scores, got {actual}")]
    ScoreCount { expected: usize, actual: usize },

    #[error("{dimension} score must be between 1 and 5 (got {value})")]
    ScoreOutOfRange {
        dimension: &'static str,
        value: i64,
    },

    #[error("risk tier is required to resolve the approval path of a Normal change")]
    MissingRiskTier,
}
