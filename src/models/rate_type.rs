//! Rate type and recurrence keys.
//!
//! This module defines the [`RateType`] and [`Recurrence`] enums used as keys
//! into the rate and recurrence tables. Both parse leniently: an absent or
//! unrecognized key resolves to the default variant instead of failing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The time-of-week category under which a support hour is billed.
///
/// # Example
///
/// ```
/// use support_estimator::models::RateType;
///
/// assert_eq!(RateType::from_key("SATURDAY"), RateType::Saturday);
/// assert_eq!(RateType::from_key("not_a_rate"), RateType::WeekdayDay);
/// assert_eq!(RateType::Sunday.to_string(), "SUNDAY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RateType {
    /// Weekday daytime support.
    #[default]
    WeekdayDay,
    /// Weekday evening support.
    WeekdayEvening,
    /// Weekday overnight support.
    WeekdayNight,
    /// Saturday support.
    Saturday,
    /// Sunday support.
    Sunday,
    /// Public holiday support.
    PublicHoliday,
}

impl RateType {
    /// Every rate type, in the order selection lists present them.
    pub const ALL: [RateType; 6] = [
        RateType::WeekdayDay,
        RateType::WeekdayEvening,
        RateType::WeekdayNight,
        RateType::Saturday,
        RateType::Sunday,
        RateType::PublicHoliday,
    ];

    /// Returns the table key for this rate type (e.g. `WEEKDAY_DAY`).
    pub fn as_key(&self) -> &'static str {
        match self {
            RateType::WeekdayDay => "WEEKDAY_DAY",
            RateType::WeekdayEvening => "WEEKDAY_EVENING",
            RateType::WeekdayNight => "WEEKDAY_NIGHT",
            RateType::Saturday => "SATURDAY",
            RateType::Sunday => "SUNDAY",
            RateType::PublicHoliday => "PUBLIC_HOLIDAY",
        }
    }

    /// Returns a human-readable label (e.g. `WEEKDAY DAY`).
    pub fn label(&self) -> String {
        self.as_key().replace('_', " ")
    }

    /// Parses a table key strictly, returning `None` for unknown keys.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn parse(key: &str) -> Option<RateType> {
        let normalized = key.trim().to_ascii_uppercase();
        RateType::ALL
            .into_iter()
            .find(|rate_type| rate_type.as_key() == normalized)
    }

    /// Parses a table key, falling back to [`RateType::WeekdayDay`] for
    /// unknown keys.
    pub fn from_key(key: &str) -> RateType {
        RateType::parse(key).unwrap_or_default()
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl Serialize for RateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for RateType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(key.as_deref().map(RateType::from_key).unwrap_or_default())
    }
}

/// How often a shift repeats, expressed against a week.
///
/// # Example
///
/// ```
/// use support_estimator::models::Recurrence;
///
/// assert_eq!(Recurrence::from_key("fortnightly"), Recurrence::Fortnightly);
/// assert_eq!(Recurrence::from_key("every_blue_moon"), Recurrence::Weekly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recurrence {
    /// Every day of the week.
    Daily,
    /// Once a week.
    #[default]
    Weekly,
    /// Once every two weeks.
    Fortnightly,
    /// Once a month.
    Monthly,
    /// Once a quarter.
    Quarterly,
}

impl Recurrence {
    /// Every recurrence, from most to least frequent.
    pub const ALL: [Recurrence; 5] = [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Fortnightly,
        Recurrence::Monthly,
        Recurrence::Quarterly,
    ];

    /// Returns the table key for this recurrence (e.g. `FORTNIGHTLY`).
    pub fn as_key(&self) -> &'static str {
        match self {
            Recurrence::Daily => "DAILY",
            Recurrence::Weekly => "WEEKLY",
            Recurrence::Fortnightly => "FORTNIGHTLY",
            Recurrence::Monthly => "MONTHLY",
            Recurrence::Quarterly => "QUARTERLY",
        }
    }

    /// Parses a table key strictly, returning `None` for unknown keys.
    pub fn parse(key: &str) -> Option<Recurrence> {
        let normalized = key.trim().to_ascii_uppercase();
        Recurrence::ALL
            .into_iter()
            .find(|recurrence| recurrence.as_key() == normalized)
    }

    /// Parses a table key, falling back to [`Recurrence::Weekly`] for
    /// unknown keys.
    pub fn from_key(key: &str) -> Recurrence {
        Recurrence::parse(key).unwrap_or_default()
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl Serialize for Recurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = Option::<String>::deserialize(deserializer)?;
        Ok(key.as_deref().map(Recurrence::from_key).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_type_keys_round_trip_through_parse() {
        for rate_type in RateType::ALL {
            assert_eq!(RateType::parse(rate_type.as_key()), Some(rate_type));
        }
    }

    #[test]
    fn test_rate_type_parse_ignores_case_and_whitespace() {
        assert_eq!(
            RateType::parse("  public_holiday "),
            Some(RateType::PublicHoliday)
        );
    }

    #[test]
    fn test_unknown_rate_type_falls_back_to_weekday_day() {
        assert_eq!(RateType::parse("CHRISTMAS"), None);
        assert_eq!(RateType::from_key("CHRISTMAS"), RateType::WeekdayDay);
        assert_eq!(RateType::from_key(""), RateType::WeekdayDay);
    }

    #[test]
    fn test_rate_type_label_replaces_underscores() {
        assert_eq!(RateType::WeekdayEvening.label(), "WEEKDAY EVENING");
        assert_eq!(RateType::Sunday.label(), "SUNDAY");
    }

    #[test]
    fn test_rate_type_serializes_as_key() {
        let json = serde_json::to_string(&RateType::WeekdayNight).unwrap();
        assert_eq!(json, "\"WEEKDAY_NIGHT\"");
    }

    #[test]
    fn test_rate_type_deserializes_unknown_and_null_to_default() {
        let unknown: RateType = serde_json::from_str("\"OVERNIGHT_SLEEPOVER\"").unwrap();
        assert_eq!(unknown, RateType::WeekdayDay);

        let null: RateType = serde_json::from_str("null").unwrap();
        assert_eq!(null, RateType::WeekdayDay);

        let known: RateType = serde_json::from_str("\"SATURDAY\"").unwrap();
        assert_eq!(known, RateType::Saturday);
    }

    #[test]
    fn test_recurrence_keys_round_trip_through_parse() {
        for recurrence in Recurrence::ALL {
            assert_eq!(Recurrence::parse(recurrence.as_key()), Some(recurrence));
        }
    }

    #[test]
    fn test_unknown_recurrence_falls_back_to_weekly() {
        assert_eq!(Recurrence::parse("YEARLY"), None);
        assert_eq!(Recurrence::from_key("YEARLY"), Recurrence::Weekly);

        let parsed: Recurrence = serde_json::from_str("\"YEARLY\"").unwrap();
        assert_eq!(parsed, Recurrence::Weekly);
    }
}
