//! Occurrences-per-week resolution.
//!
//! A shift's weekly frequency can come from its selected weekdays, its
//! recurrence, or both. The caller chooses with an [`OccurrenceBasis`]; the
//! weekly cost formula only ever sees the resulting count.

use rust_decimal::Decimal;

use crate::config::RecurrenceTable;
use crate::models::{OccurrenceBasis, Shift};

use super::lookup_multiplier;

/// Returns the number of selected weekdays, counting an empty selection as one.
pub fn day_count_occurrences(shift: &Shift) -> Decimal {
    Decimal::from(shift.selected_day_count().max(1))
}

/// Returns how many times a shift occurs in an average week.
///
/// | Basis | Occurrences |
/// |---|---|
/// | `SelectedDays` | max(1, distinct days) |
/// | `Recurrence` | recurrence multiplier |
/// | `DaysAndRecurrence` | max(1, distinct days) * recurrence multiplier |
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::occurrences_per_week;
/// use support_estimator::config::RecurrenceTable;
/// use support_estimator::models::{OccurrenceBasis, Recurrence, Shift};
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let mut shift = Shift::new_default("shift_001");
/// shift.days = vec![Weekday::Mon, Weekday::Wed, Weekday::Fri];
/// shift.recurrence = Recurrence::Fortnightly;
///
/// let table = RecurrenceTable::standard();
/// assert_eq!(
///     occurrences_per_week(&shift, OccurrenceBasis::DaysAndRecurrence, &table),
///     Decimal::new(15, 1)
/// );
/// ```
pub fn occurrences_per_week(
    shift: &Shift,
    basis: OccurrenceBasis,
    recurrence: &RecurrenceTable,
) -> Decimal {
    match basis {
        OccurrenceBasis::SelectedDays => day_count_occurrences(shift),
        OccurrenceBasis::Recurrence => lookup_multiplier(recurrence, shift.recurrence),
        OccurrenceBasis::DaysAndRecurrence => {
            day_count_occurrences(shift) * lookup_multiplier(recurrence, shift.recurrence)
        }
    }
}
