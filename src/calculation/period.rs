//! Weekly-to-period conversions.
//!
//! Used for both costs and hours: a weekly figure is multiplied by the
//! number of weeks in the target period.

use rust_decimal::Decimal;

use crate::config::PlanningConfig;
use crate::error::{EstimatorError, EstimatorResult};

fn scale(weekly: Decimal, weeks: Decimal, operation: &'static str) -> EstimatorResult<Decimal> {
    weekly
        .checked_mul(weeks)
        .ok_or(EstimatorError::Overflow { operation })
}

/// Converts a weekly figure to a monthly one using `weeks_per_month`.
///
/// # Errors
///
/// Returns `Overflow` if the monthly figure does not fit in a Decimal.
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::monthly_from_weekly;
/// use support_estimator::config::PlanningConfig;
/// use rust_decimal::Decimal;
///
/// let monthly = monthly_from_weekly(Decimal::from(100), &PlanningConfig::default()).unwrap();
/// assert_eq!(monthly, Decimal::from(433));
/// ```
pub fn monthly_from_weekly(
    weekly: Decimal,
    planning: &PlanningConfig,
) -> EstimatorResult<Decimal> {
    scale(weekly, planning.weeks_per_month, "monthly figure")
}

/// Converts a weekly figure to a fortnightly one using `weeks_per_fortnight`.
pub fn fortnightly_from_weekly(
    weekly: Decimal,
    planning: &PlanningConfig,
) -> EstimatorResult<Decimal> {
    scale(weekly, planning.weeks_per_fortnight, "fortnightly figure")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_monthly_cost() {
        let planning = PlanningConfig::default();
        assert_eq!(monthly_from_weekly(dec("785.64"), &planning).unwrap(), dec("3401.8212"));
    }

    #[test]
    fn test_fortnightly_hours() {
        let planning = PlanningConfig::default();
        assert_eq!(fortnightly_from_weekly(dec("14.5"), &planning).unwrap(), dec("29"));
    }

    #[test]
    fn test_custom_weeks_per_month() {
        let planning = PlanningConfig {
            weeks_per_month: dec("4.345"),
            ..PlanningConfig::default()
        };
        assert_eq!(monthly_from_weekly(dec("10"), &planning).unwrap(), dec("43.45"));
    }

    #[test]
    fn test_zero_stays_zero() {
        let planning = PlanningConfig::default();
        assert_eq!(monthly_from_weekly(Decimal::ZERO, &planning).unwrap(), Decimal::ZERO);
        assert_eq!(fortnightly_from_weekly(Decimal::ZERO, &planning).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_overflow_is_an_error() {
        let planning = PlanningConfig::default();
        let result = monthly_from_weekly(dec("70000000000000000000000000000"), &planning);
        assert!(matches!(
            result,
            Err(EstimatorError::Overflow {
                operation: "monthly figure"
            })
        ));
    }

    #[test]
    fn test_fortnightly_overflow_is_an_error() {
        let planning = PlanningConfig::default();
        let result = fortnightly_from_weekly(dec("70000000000000000000000000000"), &planning);
        assert!(matches!(result, Err(EstimatorError::Overflow { .. })));
    }
}
