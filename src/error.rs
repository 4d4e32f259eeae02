//! Error types for the interaction core.
//!
//! Two error domains exist: configuration validation ([`ConfigError`]),
//! raised once at construction time, and spatial query failures
//! ([`QueryError`]) reported by the feature source. Query errors carry a
//! retryability classification so callers can decide whether a retry is
//! worthwhile; the click workflow itself never retries, it logs and keeps
//! the current selection.

use thiserror::Error;

/// Errors raised while validating configuration at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The breakpoint table has no entries.
    #[error("breakpoint table is empty")]
    EmptyTable,

    /// Thresholds must be strictly increasing.
    #[error("breakpoint thresholds must be strictly increasing: {previous} then {current} at index {index}")]
    NonIncreasingThresholds {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A threshold is NaN or infinite.
    #[error("breakpoint threshold at index {index} is not finite")]
    NonFiniteThreshold { index: usize },

    /// Symbol sizes must be positive.
    #[error("breakpoint size at index {index} must be positive, got {size}")]
    NonPositiveSize { index: usize, size: f32 },
}

/// Errors returned by the feature source when a spatial query fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The feature service could not be reached.
    #[error("feature service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The query did not complete in time.
    #[error("spatial query timed out after {0}s")]
    Timeout(u64),

    /// The query itself was rejected as malformed.
    #[error("invalid spatial query: {0}")]
    InvalidQuery(String),

    /// The service returned an application-level error.
    #[error("feature service error ({code}): {message}")]
    Service { code: u16, message: String },
}

impl QueryError {
    /// Check if this error is likely transient and the query can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            QueryError::ServiceUnavailable(_) => true,
            QueryError::Timeout(_) => true,
            QueryError::InvalidQuery(_) => false,
            QueryError::Service { code, .. } => *code >= 500 || *code == 429,
        }
    }
}
