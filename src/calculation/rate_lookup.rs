//! Rate and recurrence lookup functionality.
//!
//! Lookups never fail. A rate type missing from the table is priced at the
//! [`DEFAULT_RATE_TYPE`] entry, and a recurrence missing from the table counts
//! once per week.

use rust_decimal::Decimal;

use crate::config::{RateTable, RecurrenceTable};
use crate::models::{RateType, Recurrence};

/// The rate type used when a requested one is absent or unrecognized.
pub const DEFAULT_RATE_TYPE: RateType = RateType::WeekdayDay;

/// Returns the hourly price for a rate type.
///
/// Falls back to the [`DEFAULT_RATE_TYPE`] price when the table has no entry
/// for `rate_type`, and to zero when the default is missing as well.
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::lookup_rate;
/// use support_estimator::config::RateTable;
/// use support_estimator::models::RateType;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::new([(RateType::WeekdayDay, Decimal::new(6547, 2))]);
/// assert_eq!(lookup_rate(&table, RateType::Sunday), Decimal::new(6547, 2));
/// ```
pub fn lookup_rate(rates: &RateTable, rate_type: RateType) -> Decimal {
    rates
        .get(rate_type)
        .or_else(|| rates.get(DEFAULT_RATE_TYPE))
        .unwrap_or(Decimal::ZERO)
}

/// Returns the hourly price for a raw table key.
///
/// Unknown keys are priced as [`DEFAULT_RATE_TYPE`].
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::lookup_rate_by_key;
/// use support_estimator::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::ndis_default();
/// assert_eq!(lookup_rate_by_key(&table, "SATURDAY"), Decimal::new(9212, 2));
/// assert_eq!(lookup_rate_by_key(&table, "MIDNIGHT_MASS"), Decimal::new(6547, 2));
/// ```
pub fn lookup_rate_by_key(rates: &RateTable, key: &str) -> Decimal {
    lookup_rate(rates, RateType::from_key(key))
}

/// Returns the weekly-equivalence multiplier for a recurrence, or one when
/// the table has no entry for it.
pub fn lookup_multiplier(table: &RecurrenceTable, recurrence: Recurrence) -> Decimal {
    table.get(recurrence).unwrap_or(Decimal::ONE)
}
