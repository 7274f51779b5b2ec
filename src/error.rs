//! Error types for combination search.

use thiserror::Error;

/// Errors raised when a search request is out of contract.
///
/// Malformed *cells* are never errors: the preparer drops them silently.
/// Only the scalar parameters of a request (target, tolerance, limits) can
/// make a search fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The configuration failed [`SearchConfig::validate`](crate::combination::SearchConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A negative tolerance was supplied under [`NegativeTolerance::Reject`](crate::combination::NegativeTolerance::Reject).
    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),

    /// The target is NaN or infinite.
    #[error("target must be a finite number, got {0}")]
    NonFiniteTarget(f64),

    /// The prepared sequence exceeds the configured candidate limit.
    #[error("{count} candidates exceed the limit of {limit}")]
    TooManyCandidates {
        /// Length of the prepared sequence.
        count: usize,
        /// Configured `max_candidates`.
        limit: usize,
    },
}

/// Result alias for combination search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
