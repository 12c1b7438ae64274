//! Plan cost calculation functionality.

use rust_decimal::Decimal;

use crate::error::{EstimatorError, EstimatorResult};

/// Number of weeks in a standard one-year plan.
pub const DEFAULT_PLAN_WEEKS: u32 = 52;

/// Returns [`DEFAULT_PLAN_WEEKS`] as a Decimal.
pub fn default_plan_weeks() -> Decimal {
    Decimal::from(DEFAULT_PLAN_WEEKS)
}

/// Scales a weekly cost up to a full plan duration.
///
/// # Errors
///
/// Returns `Overflow` if the plan cost does not fit in a Decimal.
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::{default_plan_weeks, total_plan_cost};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let weekly = Decimal::from_str("785.64").unwrap();
/// assert_eq!(
///     total_plan_cost(weekly, default_plan_weeks()).unwrap(),
///     Decimal::from_str("40853.28").unwrap()
/// );
/// ```
pub fn total_plan_cost(
    weekly_cost: Decimal,
    duration_weeks: Decimal,
) -> EstimatorResult<Decimal> {
    weekly_cost
        .checked_mul(duration_weeks)
        .ok_or(EstimatorError::Overflow {
            operation: "plan cost",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_weekly_cost_is_zero_plan_cost() {
        assert_eq!(
            total_plan_cost(Decimal::ZERO, default_plan_weeks()).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_year_plan() {
        assert_eq!(
            total_plan_cost(dec("785.64"), default_plan_weeks()).unwrap(),
            dec("40853.28")
        );
    }

    #[test]
    fn test_partial_plan() {
        assert_eq!(total_plan_cost(dec("100"), dec("26")).unwrap(), dec("2600"));
    }

    #[test]
    fn test_plan_cost_overflow_is_an_error() {
        let result = total_plan_cost(dec("1000000000000000000000000000"), dec("1000"));
        assert!(matches!(
            result,
            Err(EstimatorError::Overflow {
                operation: "plan cost"
            })
        ));
    }

    proptest! {
        #[test]
        fn prop_year_plan_is_52_weeks(cents in 0i64..1_000_000_000) {
            let weekly = Decimal::new(cents, 2);
            prop_assert_eq!(
                total_plan_cost(weekly, default_plan_weeks()).unwrap(),
                weekly * Decimal::from(52)
            );
        }
    }
}
