//! Estimate result models for the Support Estimator.
//!
//! This module contains the [`QuoteResult`] produced from a list of shifts
//! and the [`BudgetResult`] produced from a funding budget.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OccurrenceBasis, RateType};

/// The weekly cost of a single shift.
///
/// # Example
///
/// ```
/// use support_estimator::models::{CostLine, RateType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = CostLine {
///     shift_id: "shift_001".to_string(),
///     rate_type: RateType::WeekdayDay,
///     rate: Decimal::from_str("65.47").unwrap(),
///     hours: Decimal::from_str("4").unwrap(),
///     occurrences_per_week: Decimal::from_str("3").unwrap(),
///     weekly_hours: Decimal::from_str("12").unwrap(),
///     weekly_amount: Decimal::from_str("785.64").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// The ID of the shift this line was computed from.
    pub shift_id: String,
    /// The rate type the shift is billed at.
    pub rate_type: RateType,
    /// The hourly rate resolved from the rate table.
    pub rate: Decimal,
    /// Hours per occurrence.
    pub hours: Decimal,
    /// How many times the shift happens in an average week.
    pub occurrences_per_week: Decimal,
    /// Support hours per week (hours * occurrences).
    pub weekly_hours: Decimal,
    /// Cost per week (rate * hours * occurrences).
    pub weekly_amount: Decimal,
}

/// Aggregated cost figures for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTotals {
    /// Total cost per week across all shifts.
    pub weekly_cost: Decimal,
    /// Total cost per fortnight.
    pub fortnightly_cost: Decimal,
    /// Total cost per month.
    pub monthly_cost: Decimal,
    /// Total cost over the plan duration.
    pub plan_cost: Decimal,
    /// Total support hours per week.
    pub weekly_hours: Decimal,
    /// The plan duration in weeks.
    pub duration_weeks: Decimal,
}

/// The result of quoting a set of shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the estimator that produced the quote.
    pub engine_version: String,
    /// How occurrences per week were counted.
    pub basis: OccurrenceBasis,
    /// Per-shift weekly costs, in input order.
    pub lines: Vec<CostLine>,
    /// Aggregated totals.
    pub totals: CostTotals,
}

/// The hours a budget affords at a given rate.
///
/// # Example
///
/// ```
/// use support_estimator::models::{BudgetResult, RateType};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = BudgetResult {
///     estimate_id: Uuid::new_v4(),
///     engine_version: "0.1.0".to_string(),
///     budget: Decimal::ZERO,
///     rate_type: RateType::WeekdayDay,
///     rate: Decimal::new(6547, 2),
///     duration_weeks: Decimal::new(52, 0),
///     total_hours: Decimal::ZERO,
///     hours_per_week: Decimal::ZERO,
///     hours_per_fortnight: Decimal::ZERO,
///     hours_per_month: Decimal::ZERO,
/// };
/// assert!(result.hours_per_week.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Unique identifier for this estimate.
    pub estimate_id: Uuid,
    /// The version of the estimator that produced the estimate.
    pub engine_version: String,
    /// The funding the estimate was computed from.
    pub budget: Decimal,
    /// The rate type the budget is spent at.
    pub rate_type: RateType,
    /// The hourly rate resolved from the rate table.
    pub rate: Decimal,
    /// The plan duration in weeks.
    pub duration_weeks: Decimal,
    /// Hours the whole budget buys.
    pub total_hours: Decimal,
    /// Hours per week across the plan duration.
    pub hours_per_week: Decimal,
    /// Hours per fortnight.
    pub hours_per_fortnight: Decimal,
    /// Hours per month.
    pub hours_per_month: Decimal,
}
