//! Budget-to-hours calculation functionality.
//!
//! This module works backwards from a funding budget to the hours of support
//! it buys at a given rate.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::RateType;

use super::lookup_rate;

/// Returns the total hours a budget buys at the rate for `rate_type`.
///
/// # Errors
///
/// Returns `InvalidRate` if the resolved rate is zero or negative, or
/// `Overflow` if the quotient does not fit in a Decimal.
pub fn total_hours_from_budget(
    budget: Decimal,
    rate_type: RateType,
    rates: &RateTable,
) -> EstimatorResult<Decimal> {
    let rate = lookup_rate(rates, rate_type);
    if rate <= Decimal::ZERO {
        return Err(EstimatorError::InvalidRate { rate_type, rate });
    }

    budget.checked_div(rate).ok_or(EstimatorError::Overflow {
        operation: "total hours",
    })
}

/// Returns the hours per week a budget buys over a plan duration.
///
/// `hours_per_week = (budget / rate(rate_type)) / duration_weeks`
///
/// Negative budgets are not rejected and produce negative hours.
///
/// # Arguments
///
/// * `budget` - Total plan funding
/// * `rate_type` - The rate category the funding is spent at
/// * `duration_weeks` - Plan duration in weeks
/// * `rates` - The rate table to price against
///
/// # Errors
///
/// Returns:
/// - `InvalidRate` if the resolved rate is zero or negative
/// - `InvalidDuration` if `duration_weeks` is zero or negative
/// - `Overflow` if an intermediate quotient does not fit in a Decimal
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::hours_from_budget;
/// use support_estimator::config::RateTable;
/// use support_estimator::models::RateType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = hours_from_budget(
///     Decimal::from(50_000),
///     RateType::WeekdayDay,
///     Decimal::from(52),
///     &RateTable::ndis_default(),
/// )
/// .unwrap();
/// assert_eq!(hours.round_dp(3), Decimal::from_str("14.687").unwrap());
/// ```
pub fn hours_from_budget(
    budget: Decimal,
    rate_type: RateType,
    duration_weeks: Decimal,
    rates: &RateTable,
) -> EstimatorResult<Decimal> {
    if duration_weeks <= Decimal::ZERO {
        return Err(EstimatorError::InvalidDuration {
            weeks: duration_weeks,
        });
    }

    let total_hours = total_hours_from_budget(budget, rate_type, rates)?;
    total_hours
        .checked_div(duration_weeks)
        .ok_or(EstimatorError::Overflow {
            operation: "hours per week",
        })
}
