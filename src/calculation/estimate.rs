//! Quote and budget estimates.
//!
//! These functions assemble the individual calculations into the two
//! summaries a caller shows: what a set of shifts costs, and how many hours a
//! budget affords.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RateSchedule;
use crate::error::EstimatorResult;
use crate::models::{Budget, BudgetResult, CostTotals, OccurrenceBasis, QuoteResult, Shift};

use super::{
    calculate_weekly_cost, fortnightly_from_weekly, hours_from_budget, lookup_rate,
    monthly_from_weekly, total_hours_from_budget, total_plan_cost,
};

/// Builds a quote for a list of shifts over `duration_weeks`.
///
/// # Errors
///
/// Returns `Overflow` if any cost does not fit in a Decimal.
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::build_quote;
/// use support_estimator::config::RateSchedule;
/// use support_estimator::models::{OccurrenceBasis, ShiftPlan};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let plan = ShiftPlan::default();
/// let quote = build_quote(
///     plan.shifts(),
///     &RateSchedule::ndis_default(),
///     OccurrenceBasis::SelectedDays,
///     Decimal::from(52),
/// )
/// .unwrap();
/// assert_eq!(quote.totals.plan_cost, Decimal::from_str("40853.28").unwrap());
/// ```
pub fn build_quote(
    shifts: &[Shift],
    schedule: &RateSchedule,
    basis: OccurrenceBasis,
    duration_weeks: Decimal,
) -> EstimatorResult<QuoteResult> {
    let weekly = calculate_weekly_cost(shifts, schedule, basis)?;
    let planning = schedule.planning();

    Ok(QuoteResult {
        quote_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        basis,
        lines: weekly.lines,
        totals: CostTotals {
            weekly_cost: weekly.weekly_cost,
            fortnightly_cost: fortnightly_from_weekly(weekly.weekly_cost, planning)?,
            monthly_cost: monthly_from_weekly(weekly.weekly_cost, planning)?,
            plan_cost: total_plan_cost(weekly.weekly_cost, duration_weeks)?,
            weekly_hours: weekly.weekly_hours,
            duration_weeks,
        },
    })
}

/// Builds a budget estimate: the hours a budget affords over `duration_weeks`.
///
/// # Errors
///
/// Returns `InvalidRate`, `InvalidDuration` or `Overflow` as described on
/// [`hours_from_budget`], or `Overflow` if a period conversion does not fit
/// in a Decimal.
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::build_budget_estimate;
/// use support_estimator::config::RateSchedule;
/// use support_estimator::models::Budget;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let estimate = build_budget_estimate(
///     &Budget::default(),
///     &RateSchedule::ndis_default(),
///     Decimal::from(52),
/// )
/// .unwrap();
/// assert_eq!(estimate.hours_per_week.round_dp(1), Decimal::from_str("14.7").unwrap());
/// ```
pub fn build_budget_estimate(
    budget: &Budget,
    schedule: &RateSchedule,
    duration_weeks: Decimal,
) -> EstimatorResult<BudgetResult> {
    let rates = schedule.rates();
    let planning = schedule.planning();

    let hours_per_week = hours_from_budget(budget.amount, budget.rate_type, duration_weeks, rates)?;
    let total_hours = total_hours_from_budget(budget.amount, budget.rate_type, rates)?;

    Ok(BudgetResult {
        estimate_id: Uuid::new_v4(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        budget: budget.amount,
        rate_type: budget.rate_type,
        rate: lookup_rate(rates, budget.rate_type),
        duration_weeks,
        total_hours,
        hours_per_week,
        hours_per_fortnight: fortnightly_from_weekly(hours_per_week, planning)?,
        hours_per_month: monthly_from_weekly(hours_per_week, planning)?,
    })
}
