//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct describing one planned support
//! period, the [`ShiftEdit`] used to change a single field of a shift, and the
//! [`OccurrenceBasis`] that decides how a shift's weekly frequency is counted.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RateType, Recurrence};

/// How the number of occurrences per week is derived from a shift.
///
/// # Example
///
/// ```
/// use support_estimator::models::OccurrenceBasis;
///
/// assert_eq!(OccurrenceBasis::default(), OccurrenceBasis::SelectedDays);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceBasis {
    /// One occurrence per selected weekday, with a minimum of one.
    #[default]
    SelectedDays,
    /// The recurrence multiplier alone; selected days are ignored.
    Recurrence,
    /// Selected weekdays (minimum one) scaled by the recurrence multiplier.
    DaysAndRecurrence,
}

/// Represents one planned support period.
///
/// # Example
///
/// ```
/// use support_estimator::models::{Recurrence, RateType, Shift};
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     rate_type: RateType::WeekdayDay,
///     hours: Decimal::new(4, 0),
///     days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
///     recurrence: Recurrence::Weekly,
/// };
/// assert_eq!(shift.selected_day_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Identifier for the shift within a plan.
    #[serde(default)]
    pub id: String,
    /// The billing category for the shift's hours.
    #[serde(default)]
    pub rate_type: RateType,
    /// Hours of support per occurrence.
    pub hours: Decimal,
    /// Weekdays on which the shift recurs.
    #[serde(default)]
    pub days: Vec<Weekday>,
    /// How often the shift repeats.
    #[serde(default)]
    pub recurrence: Recurrence,
}

/// A change to a single field of a [`Shift`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ShiftEdit {
    /// Replace the rate type.
    RateType(RateType),
    /// Replace the hours per occurrence.
    Hours(Decimal),
    /// Replace the selected weekdays.
    Days(Vec<Weekday>),
    /// Replace the recurrence.
    Recurrence(Recurrence),
}

impl Shift {
    /// Creates the shift a plan starts from when a new row is added:
    /// two weekday-day hours on Monday, repeating weekly.
    pub fn new_default(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rate_type: RateType::WeekdayDay,
            hours: Decimal::new(2, 0),
            days: vec![Weekday::Mon],
            recurrence: Recurrence::Weekly,
        }
    }

    /// Returns the number of distinct weekdays selected.
    pub fn selected_day_count(&self) -> usize {
        let mut seen: Vec<Weekday> = Vec::with_capacity(self.days.len());
        for day in &self.days {
            if !seen.contains(day) {
                seen.push(*day);
            }
        }
        seen.len()
    }

    /// Returns true if the given weekday is selected.
    pub fn has_day(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Selects the weekday if it is not selected, otherwise deselects it.
    pub fn toggle_day(&mut self, day: Weekday) {
        if self.has_day(day) {
            self.days.retain(|d| *d != day);
        } else {
            self.days.push(day);
        }
    }

    /// Applies a single-field edit.
    pub fn apply(&mut self, edit: ShiftEdit) {
        match edit {
            ShiftEdit::RateType(rate_type) => self.rate_type = rate_type,
            ShiftEdit::Hours(hours) => self.hours = hours,
            ShiftEdit::Days(days) => self.days = days,
            ShiftEdit::Recurrence(recurrence) => self.recurrence = recurrence,
        }
    }
}
