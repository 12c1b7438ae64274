//! Core data models for the Support Estimator.
//!
//! This module contains all the domain models used throughout the estimator.

mod estimate_result;
mod plan;
mod rate_type;
mod shift;

pub use estimate_result::{BudgetResult, CostLine, CostTotals, QuoteResult};
pub use plan::{Budget, ShiftPlan};
pub use rate_type::{RateType, Recurrence};
pub use shift::{OccurrenceBasis, Shift, ShiftEdit};
