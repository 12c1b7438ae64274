//! Request types for the Support Estimator API.
//!
//! This module defines the JSON request structures for the `/quote` and
//! `/budget` endpoints.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Budget, OccurrenceBasis, RateType, Recurrence, Shift};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The planned shifts.
    pub shifts: Vec<ShiftRequest>,
    /// How occurrences per week are counted.
    #[serde(default)]
    pub basis: OccurrenceBasis,
    /// Plan duration in weeks; the schedule default is used when absent.
    #[serde(default)]
    pub duration_weeks: Option<Decimal>,
}

/// Shift information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Identifier for the shift; generated from its position when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// The rate type; unknown or absent values use the default rate type.
    #[serde(default)]
    pub rate_type: RateType,
    /// Hours per occurrence.
    pub hours: Decimal,
    /// Weekdays on which the shift recurs.
    #[serde(default)]
    pub days: Vec<Weekday>,
    /// How often the shift repeats.
    #[serde(default)]
    pub recurrence: Recurrence,
}

/// Request body for the `/budget` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Total plan funding.
    pub budget: Decimal,
    /// The preferred rate type.
    #[serde(default)]
    pub rate_type: RateType,
    /// Plan duration in weeks; the schedule default is used when absent.
    #[serde(default)]
    pub duration_weeks: Option<Decimal>,
}

impl ShiftRequest {
    /// Converts the request into a shift, naming it by position if it has
    /// no id of its own.
    pub fn into_shift(self, position: usize) -> Shift {
        Shift {
            id: self
                .id
                .unwrap_or_else(|| format!("shift_{:03}", position + 1)),
            rate_type: self.rate_type,
            hours: self.hours,
            days: self.days,
            recurrence: self.recurrence,
        }
    }
}

impl From<BudgetRequest> for Budget {
    fn from(req: BudgetRequest) -> Self {
        Budget {
            amount: req.budget,
            rate_type: req.rate_type,
        }
    }
}
