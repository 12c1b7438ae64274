//! Configuration types for support estimation.
//!
//! This module contains the rate and recurrence tables and the
//! [`RateSchedule`] that bundles them. Schedules are passed into the
//! calculation functions explicitly; nothing here is global.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{RateType, Recurrence};

/// Metadata about a rate schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// A short code for the schedule (e.g. "NDIS-DAILY-LIFE").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the published price guide.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Constants used to convert weekly figures to other periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Average number of weeks in a month.
    pub weeks_per_month: Decimal,
    /// Number of weeks in a fortnight.
    pub weeks_per_fortnight: Decimal,
    /// Plan duration used when a request does not give one.
    pub default_duration_weeks: Decimal,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            weeks_per_month: Decimal::new(433, 2),
            weeks_per_fortnight: Decimal::new(2, 0),
            default_duration_weeks: Decimal::new(52, 0),
        }
    }
}

/// Hourly price per rate type.
///
/// A table may omit rate types; lookups for missing entries are resolved by
/// [`crate::calculation::lookup_rate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateTable {
    rates: HashMap<RateType, Decimal>,
}

impl RateTable {
    /// Creates a table from `(rate type, hourly price)` pairs.
    pub fn new(rates: impl IntoIterator<Item = (RateType, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// The approximate NDIS support rates.
    ///
    /// # Example
    ///
    /// ```
    /// use support_estimator::config::RateTable;
    /// use support_estimator::models::RateType;
    /// use rust_decimal::Decimal;
    ///
    /// let table = RateTable::ndis_default();
    /// assert_eq!(table.get(RateType::WeekdayDay), Some(Decimal::new(6547, 2)));
    /// ```
    pub fn ndis_default() -> Self {
        Self::new([
            (RateType::WeekdayDay, Decimal::new(6547, 2)),
            (RateType::WeekdayEvening, Decimal::new(7213, 2)),
            (RateType::WeekdayNight, Decimal::new(7346, 2)),
            (RateType::Saturday, Decimal::new(9212, 2)),
            (RateType::Sunday, Decimal::new(11878, 2)),
            (RateType::PublicHoliday, Decimal::new(14544, 2)),
        ])
    }

    /// Returns the configured price for a rate type, without any fallback.
    pub fn get(&self, rate_type: RateType) -> Option<Decimal> {
        self.rates.get(&rate_type).copied()
    }

    /// Iterates over configured entries in [`RateType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RateType, Decimal)> + '_ {
        RateType::ALL
            .into_iter()
            .filter_map(|rate_type| self.get(rate_type).map(|rate| (rate_type, rate)))
    }

    /// Returns the number of configured rate types.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rate types are configured.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Weekly-equivalence multiplier per recurrence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecurrenceTable {
    multipliers: HashMap<Recurrence, Decimal>,
}

impl RecurrenceTable {
    /// Creates a table from `(recurrence, multiplier)` pairs.
    pub fn new(multipliers: impl IntoIterator<Item = (Recurrence, Decimal)>) -> Self {
        Self {
            multipliers: multipliers.into_iter().collect(),
        }
    }

    /// The standard multipliers: a month is ~4.33 weeks and a quarter ~13.
    ///
    /// # Example
    ///
    /// ```
    /// use support_estimator::config::RecurrenceTable;
    /// use support_estimator::models::Recurrence;
    /// use rust_decimal::Decimal;
    ///
    /// let table = RecurrenceTable::standard();
    /// assert_eq!(table.get(Recurrence::Fortnightly), Some(Decimal::new(5, 1)));
    /// ```
    pub fn standard() -> Self {
        Self::new([
            (Recurrence::Daily, Decimal::new(7, 0)),
            (Recurrence::Weekly, Decimal::ONE),
            (Recurrence::Fortnightly, Decimal::new(5, 1)),
            (Recurrence::Monthly, Decimal::new(23, 2)),
            (Recurrence::Quarterly, Decimal::new(77, 3)),
        ])
    }

    /// Returns the configured multiplier for a recurrence, without any fallback.
    pub fn get(&self, recurrence: Recurrence) -> Option<Decimal> {
        self.multipliers.get(&recurrence).copied()
    }

    /// Iterates over configured entries in [`Recurrence::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Recurrence, Decimal)> + '_ {
        Recurrence::ALL
            .into_iter()
            .filter_map(|recurrence| self.get(recurrence).map(|m| (recurrence, m)))
    }
}

/// A complete, immutable set of tables used by the calculations.
///
/// # Example
///
/// ```
/// use support_estimator::config::RateSchedule;
///
/// let schedule = RateSchedule::ndis_default();
/// assert_eq!(schedule.rates().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateSchedule {
    metadata: ScheduleMetadata,
    rates: RateTable,
    recurrence: RecurrenceTable,
    planning: PlanningConfig,
}

impl RateSchedule {
    /// Creates a schedule from its component parts.
    pub fn new(
        metadata: ScheduleMetadata,
        rates: RateTable,
        recurrence: RecurrenceTable,
        planning: PlanningConfig,
    ) -> Self {
        Self {
            metadata,
            rates,
            recurrence,
            planning,
        }
    }

    /// The built-in schedule: approximate NDIS rates, standard recurrence
    /// multipliers and default planning constants.
    pub fn ndis_default() -> Self {
        Self::new(
            ScheduleMetadata {
                code: "NDIS-DAILY-LIFE".to_string(),
                name: "NDIS Assistance with Daily Life (approximate)".to_string(),
                version: "built-in".to_string(),
                source_url: None,
            },
            RateTable::ndis_default(),
            RecurrenceTable::standard(),
            PlanningConfig::default(),
        )
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the recurrence multiplier table.
    pub fn recurrence(&self) -> &RecurrenceTable {
        &self.recurrence
    }

    /// Returns the planning constants.
    pub fn planning(&self) -> &PlanningConfig {
        &self.planning
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::ndis_default()
    }
}
