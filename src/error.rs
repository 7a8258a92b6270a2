//! Error types for tour construction.

use thiserror::Error;

/// Result type alias for solver operations.
pub type TspResult<T> = std::result::Result<T, TspError>;

/// Failures surfaced to the caller.
///
/// Zero-length edges and solver runs that never stagnate are not errors:
/// the former get a bounded attractiveness in the weight function, the
/// latter stop at the iteration cap with
/// [`Termination::IterationCap`](crate::models::Termination::IterationCap).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// The location set cannot be solved (empty, too small, non-finite).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A tour is not a permutation of the location indices.
    #[error("invalid tour at position {index}: {reason}")]
    InvalidTour {
        /// Position in the tour where the problem was detected.
        index: usize,
        /// What is wrong at that position.
        reason: &'static str,
    },

    /// Solver configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Edge weights could not form a probability distribution.
    #[error("sampling failure at step {step}: weight total {total}")]
    SamplingFailure {
        /// Construction step (1-based count of placed locations) that failed.
        step: usize,
        /// Sum of candidate weights observed.
        total: f64,
    },
}
