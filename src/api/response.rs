//! Response types for the Support Estimator API.
//!
//! This module defines the rate listing returned by `/rates`, the error
//! response structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PlanningConfig, RateSchedule, ScheduleMetadata};
use crate::error::EstimatorError;
use crate::models::{RateType, Recurrence};

/// One selectable rate type with its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// The rate type key.
    pub rate_type: RateType,
    /// Display label for the rate type.
    pub label: String,
    /// Hourly price.
    pub hourly_rate: Decimal,
}

/// One selectable recurrence with its weekly multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceEntry {
    /// The recurrence key.
    pub recurrence: Recurrence,
    /// Occurrences per week.
    pub multiplier: Decimal,
}

/// Response body for `GET /rates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The schedule the rates come from.
    pub schedule: ScheduleMetadata,
    /// Rate types in display order.
    pub rates: Vec<RateEntry>,
    /// Recurrences from most to least frequent.
    pub recurrences: Vec<RecurrenceEntry>,
    /// Period conversion constants.
    pub planning: PlanningConfig,
}

impl From<&RateSchedule> for RatesResponse {
    fn from(schedule: &RateSchedule) -> Self {
        RatesResponse {
            schedule: schedule.metadata().clone(),
            rates: schedule
                .rates()
                .iter()
                .map(|(rate_type, hourly_rate)| RateEntry {
                    rate_type,
                    label: rate_type.label(),
                    hourly_rate,
                })
                .collect(),
            recurrences: schedule
                .recurrence()
                .iter()
                .map(|(recurrence, multiplier)| RecurrenceEntry {
                    recurrence,
                    multiplier,
                })
                .collect(),
            planning: schedule.planning().clone(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EstimatorError> for ApiErrorResponse {
    fn from(error: EstimatorError) -> Self {
        match error {
            EstimatorError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EstimatorError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EstimatorError::InvalidRate { rate_type, rate } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_RATE",
                    format!("Invalid rate for {}: ${}", rate_type, rate),
                    "Hours cannot be derived from a budget at a zero or negative rate",
                ),
            },
            EstimatorError::InvalidDuration { weeks } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_DURATION",
                    format!("Invalid plan duration: {} weeks", weeks),
                    "The plan duration must be a positive number of weeks",
                ),
            },
            EstimatorError::Overflow { operation } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CALCULATION_OVERFLOW",
                    format!("Calculation overflowed while computing {}", operation),
                    "Reduce the hours, budget or plan duration",
                ),
            },
        }
    }
}
