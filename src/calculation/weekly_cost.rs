//! Weekly cost calculation functionality.
//!
//! Every shift is costed with the same formula,
//! `rate * hours * occurrences per week`, where the occurrence count comes
//! from the chosen [`OccurrenceBasis`].

use rust_decimal::Decimal;

use crate::config::RateSchedule;
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{CostLine, OccurrenceBasis, Shift};

use super::{lookup_rate, occurrences_per_week};

/// The weekly cost of a list of shifts.
#[derive(Debug, Clone)]
pub struct WeeklyCostResult {
    /// One line per input shift, in input order.
    pub lines: Vec<CostLine>,
    /// Sum of all line amounts.
    pub weekly_cost: Decimal,
    /// Sum of all line weekly hours.
    pub weekly_hours: Decimal,
}

/// Returns `rate * hours * occurrences_per_week`.
///
/// # Errors
///
/// Returns `Overflow` if the product does not fit in a Decimal.
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::shift_weekly_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = shift_weekly_cost(
///     Decimal::from_str("65.47").unwrap(),
///     Decimal::from_str("4").unwrap(),
///     Decimal::from_str("3").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(cost, Decimal::from_str("785.64").unwrap());
/// ```
pub fn shift_weekly_cost(
    rate: Decimal,
    hours: Decimal,
    occurrences_per_week: Decimal,
) -> EstimatorResult<Decimal> {
    rate.checked_mul(hours)
        .and_then(|amount| amount.checked_mul(occurrences_per_week))
        .ok_or(EstimatorError::Overflow {
            operation: "weekly cost",
        })
}

fn checked_sum(
    mut values: impl Iterator<Item = Decimal>,
    operation: &'static str,
) -> EstimatorResult<Decimal> {
    values.try_fold(Decimal::ZERO, |total, value| {
        total
            .checked_add(value)
            .ok_or(EstimatorError::Overflow { operation })
    })
}

/// Calculates the weekly cost of a list of shifts.
///
/// Each shift's rate is resolved through [`lookup_rate`], so unknown or
/// missing rate types are priced at the default rate. An empty list costs
/// zero. Inputs are not validated: negative hours produce negative lines.
///
/// # Errors
///
/// Returns `Overflow` if any line or total does not fit in a Decimal.
///
/// # Arguments
///
/// * `shifts` - The planned shifts
/// * `schedule` - Rate and recurrence tables to price against
/// * `basis` - How occurrences per week are counted
///
/// # Examples
///
/// ```
/// use support_estimator::calculation::calculate_weekly_cost;
/// use support_estimator::config::RateSchedule;
/// use support_estimator::models::{OccurrenceBasis, RateType, Recurrence, Shift};
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     rate_type: RateType::WeekdayDay,
///     hours: Decimal::from(4),
///     days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
///     recurrence: Recurrence::Weekly,
/// };
///
/// let result = calculate_weekly_cost(
///     &[shift],
///     &RateSchedule::ndis_default(),
///     OccurrenceBasis::SelectedDays,
/// )
/// .unwrap();
/// assert_eq!(result.weekly_cost, Decimal::from_str("785.64").unwrap());
/// assert_eq!(result.weekly_hours, Decimal::from(12));
/// ```
pub fn calculate_weekly_cost(
    shifts: &[Shift],
    schedule: &RateSchedule,
    basis: OccurrenceBasis,
) -> EstimatorResult<WeeklyCostResult> {
    let lines = shifts
        .iter()
        .map(|shift| {
            let rate = lookup_rate(schedule.rates(), shift.rate_type);
            let occurrences = occurrences_per_week(shift, basis, schedule.recurrence());
            let weekly_hours = shift.hours.checked_mul(occurrences).ok_or(
                EstimatorError::Overflow {
                    operation: "weekly hours",
                },
            )?;
            Ok(CostLine {
                shift_id: shift.id.clone(),
                rate_type: shift.rate_type,
                rate,
                hours: shift.hours,
                occurrences_per_week: occurrences,
                weekly_hours,
                weekly_amount: shift_weekly_cost(rate, shift.hours, occurrences)?,
            })
        })
        .collect::<EstimatorResult<Vec<CostLine>>>()?;

    let weekly_cost = checked_sum(lines.iter().map(|l| l.weekly_amount), "weekly cost")?;
    let weekly_hours = checked_sum(lines.iter().map(|l| l.weekly_hours), "weekly hours")?;

    Ok(WeeklyCostResult {
        lines,
        weekly_cost,
        weekly_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlanningConfig, RateTable, RecurrenceTable, ScheduleMetadata};
    use crate::models::{RateType, Recurrence};
    use chrono::Weekday;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(
        id: &str,
        rate_type: RateType,
        hours: &str,
        days: Vec<Weekday>,
        recurrence: Recurrence,
    ) -> Shift {
        Shift {
            id: id.to_string(),
            rate_type,
            hours: dec(hours),
            days,
            recurrence,
        }
    }

    /// WC-001: empty shift list costs nothing
    #[test]
    fn test_empty_shift_list_costs_zero() {
        let schedule = RateSchedule::ndis_default();
        for basis in [
            OccurrenceBasis::SelectedDays,
            OccurrenceBasis::Recurrence,
            OccurrenceBasis::DaysAndRecurrence,
        ] {
            let result = calculate_weekly_cost(&[], &schedule, basis).unwrap();
            assert_eq!(result.weekly_cost, Decimal::ZERO);
            assert_eq!(result.weekly_hours, Decimal::ZERO);
            assert!(result.lines.is_empty());
        }
    }

    /// WC-002: 4h weekday day on Mon/Wed/Fri
    #[test]
    fn test_three_days_weekday_day() {
        let shift = make_shift(
            "shift_001",
            RateType::WeekdayDay,
            "4",
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            Recurrence::Weekly,
        );
        let result = calculate_weekly_cost(
            &[shift],
            &RateSchedule::ndis_default(),
            OccurrenceBasis::SelectedDays,
        )
        .unwrap();

        assert_eq!(result.weekly_cost, dec("785.64"));
        let line = &result.lines[0];
        assert_eq!(line.shift_id, "shift_001");
        assert_eq!(line.rate, dec("65.47"));
        assert_eq!(line.occurrences_per_week, dec("3"));
        assert_eq!(line.weekly_hours, dec("12"));
    }

    /// WC-003: no selected days is charged once per week
    #[test]
    fn test_zero_days_charged_once() {
        let shift = make_shift("shift_001", RateType::Sunday, "3", vec![], Recurrence::Weekly);
        let result = calculate_weekly_cost(
            &[shift],
            &RateSchedule::ndis_default(),
            OccurrenceBasis::SelectedDays,
        )
        .unwrap();
        assert_eq!(result.weekly_cost, dec("356.34"));
    }

    /// WC-004: recurrence mode uses the multiplier
    #[test]
    fn test_recurrence_mode_fortnightly() {
        let shift = make_shift(
            "shift_001",
            RateType::Saturday,
            "6",
            vec![Weekday::Sat, Weekday::Sun],
            Recurrence::Fortnightly,
        );
        let result = calculate_weekly_cost(
            &[shift],
            &RateSchedule::ndis_default(),
            OccurrenceBasis::Recurrence,
        )
        .unwrap();
        // 92.12 * 6 * 0.5
        assert_eq!(result.weekly_cost, dec("276.36"));
        assert_eq!(result.weekly_hours, dec("3"));
    }

    /// WC-005: weekly recurrence matches one selected day
    #[test]
    fn test_day_count_and_recurrence_modes_agree() {
        let schedule = RateSchedule::ndis_default();
        for rate_type in RateType::ALL {
            let shift = make_shift(
                "shift_001",
                rate_type,
                "2.5",
                vec![Weekday::Tue],
                Recurrence::Weekly,
            );
            let by_days = calculate_weekly_cost(
                std::slice::from_ref(&shift),
                &schedule,
                OccurrenceBasis::SelectedDays,
            )
            .unwrap();
            let by_recurrence =
                calculate_weekly_cost(&[shift], &schedule, OccurrenceBasis::Recurrence).unwrap();

            let expected = lookup_rate(schedule.rates(), rate_type) * dec("2.5");
            assert_eq!(by_days.weekly_cost, expected);
            assert_eq!(by_recurrence.weekly_cost, expected);
        }
    }

    /// WC-006: totals sum across shifts
    #[test]
    fn test_multiple_shifts_sum() {
        let shifts = vec![
            make_shift(
                "shift_001",
                RateType::WeekdayDay,
                "4",
                vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
                Recurrence::Weekly,
            ),
            make_shift(
                "shift_002",
                RateType::Saturday,
                "2",
                vec![Weekday::Sat],
                Recurrence::Weekly,
            ),
        ];
        let result = calculate_weekly_cost(
            &shifts,
            &RateSchedule::ndis_default(),
            OccurrenceBasis::SelectedDays,
        )
        .unwrap();

        // 785.64 + 184.24
        assert_eq!(result.weekly_cost, dec("969.88"));
        assert_eq!(result.weekly_hours, dec("14"));
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[1].shift_id, "shift_002");
    }

    /// WC-007: a rate type missing from an injected table uses the default price
    #[test]
    fn test_missing_rate_uses_default_price() {
        let schedule = RateSchedule::new(
            ScheduleMetadata {
                code: "PARTIAL".to_string(),
                name: "Partial".to_string(),
                version: "1".to_string(),
                source_url: None,
            },
            RateTable::new([(RateType::WeekdayDay, dec("50"))]),
            RecurrenceTable::standard(),
            PlanningConfig::default(),
        );
        let shift = make_shift(
            "shift_001",
            RateType::PublicHoliday,
            "2",
            vec![Weekday::Mon],
            Recurrence::Weekly,
        );
        let result = calculate_weekly_cost(&[shift], &schedule, OccurrenceBasis::SelectedDays)
            .unwrap();

        assert_eq!(result.lines[0].rate, dec("50"));
        assert_eq!(result.weekly_cost, dec("100"));
    }

    /// WC-008: negative hours are not rejected
    #[test]
    fn test_negative_hours_produce_negative_cost() {
        let shift = make_shift(
            "shift_001",
            RateType::WeekdayDay,
            "-1",
            vec![Weekday::Mon],
            Recurrence::Weekly,
        );
        let result = calculate_weekly_cost(
            &[shift],
            &RateSchedule::ndis_default(),
            OccurrenceBasis::SelectedDays,
        )
        .unwrap();
        assert_eq!(result.weekly_cost, dec("-65.47"));
    }

    /// WC-009: a line too large for a Decimal is an error
    #[test]
    fn test_line_overflow_is_an_error() {
        let shift = make_shift(
            "shift_001",
            RateType::Sunday,
            "79228162514264337593543950335",
            vec![Weekday::Mon],
            Recurrence::Weekly,
        );
        let result = calculate_weekly_cost(
            &[shift],
            &RateSchedule::ndis_default(),
            OccurrenceBasis::SelectedDays,
        );
        assert!(matches!(result, Err(EstimatorError::Overflow { .. })));
    }

    /// WC-010: lines that fit can still overflow the total
    #[test]
    fn test_total_overflow_is_an_error() {
        let shift = make_shift(
            "shift_001",
            RateType::WeekdayDay,
            "1000000000000000000000000000",
            vec![Weekday::Mon],
            Recurrence::Weekly,
        );
        let shifts = vec![shift; 2];
        let schedule = RateSchedule::new(
            ScheduleMetadata {
                code: "UNIT".to_string(),
                name: "Unit".to_string(),
                version: "1".to_string(),
                source_url: None,
            },
            RateTable::new([(RateType::WeekdayDay, dec("50"))]),
            RecurrenceTable::standard(),
            PlanningConfig::default(),
        );

        let single = calculate_weekly_cost(&shifts[..1], &schedule, OccurrenceBasis::SelectedDays);
        assert!(single.is_ok());

        let result = calculate_weekly_cost(&shifts, &schedule, OccurrenceBasis::SelectedDays);
        assert!(matches!(
            result,
            Err(EstimatorError::Overflow {
                operation: "weekly cost"
            })
        ));
    }

    #[test]
    fn test_shift_weekly_cost_overflow() {
        let result = shift_weekly_cost(Decimal::MAX, dec("2"), Decimal::ONE);
        assert!(matches!(result, Err(EstimatorError::Overflow { .. })));
    }
}
