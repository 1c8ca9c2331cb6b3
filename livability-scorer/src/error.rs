//! Error types raised while validating scoring options.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors reported by [`ScoringOptions::validate`](crate::ScoringOptions::validate).
///
/// Scoring itself never fails; these errors exist for callers that want to
/// reject odd settings at their boundary instead of scoring with them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringOptionsError {
    /// A radius was negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative number of kilometres (got {value})")]
    InvalidRadius {
        /// Name of the offending option.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The suburban threshold does not sit below the urban threshold.
    #[error("suburban threshold {suburban} must be below urban threshold {urban}")]
    InvertedThresholds {
        /// Configured urban threshold.
        urban: usize,
        /// Configured suburban threshold.
        suburban: usize,
    },
}
