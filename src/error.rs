//! Error types for the Support Estimator.
//!
//! Rate and recurrence lookups never fail; they fall back to defaults. The
//! errors here cover configuration loading, the two divisions in the
//! budget-to-hours direction that have no meaningful answer, and results too
//! large to represent.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::RateType;

/// The main error type for the Support Estimator.
///
/// # Example
///
/// ```
/// use support_estimator::error::EstimatorError;
///
/// let error = EstimatorError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The hourly rate resolved for a rate type is zero or negative, so no
    /// number of hours can be derived from a budget.
    #[error("Invalid rate for {rate_type}: ${rate} (rate must be positive)")]
    InvalidRate {
        /// The rate type that was requested.
        rate_type: RateType,
        /// The rate that was resolved from the table.
        rate: Decimal,
    },

    /// The plan duration is zero or negative.
    #[error("Invalid plan duration: {weeks} weeks (duration must be positive)")]
    InvalidDuration {
        /// The duration that was supplied.
        weeks: Decimal,
    },

    /// An intermediate value exceeded the range of a Decimal.
    #[error("Calculation overflowed while computing {operation}")]
    Overflow {
        /// The quantity being computed when the overflow occurred.
        operation: &'static str,
    },
}

/// A type alias for Results that return EstimatorError.
pub type EstimatorResult<T> = Result<T, EstimatorError>;
