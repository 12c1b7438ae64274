//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate
//! schedule from YAML files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{RateType, Recurrence};

use super::types::{PlanningConfig, RateSchedule, RateTable, RecurrenceTable, ScheduleMetadata};

/// Structure of `schedule.yaml`.
#[derive(Debug, Deserialize)]
struct ScheduleFile {
    schedule: ScheduleMetadata,
    #[serde(default)]
    planning: PlanningConfig,
}

/// Structure of `rates.yaml`.
#[derive(Debug, Deserialize)]
struct RatesFile {
    rates: HashMap<String, Decimal>,
}

/// Structure of `recurrence.yaml`.
#[derive(Debug, Deserialize)]
struct RecurrenceFile {
    multipliers: HashMap<String, Decimal>,
}

/// Loads and provides access to a rate schedule.
///
/// # Directory Structure
///
/// ```text
/// config/ndis/
/// ├── schedule.yaml    # Schedule metadata and planning constants
/// ├── rates.yaml       # Hourly price per rate type
/// └── recurrence.yaml  # Weekly multiplier per recurrence
/// ```
///
/// Keys in `rates.yaml` and `recurrence.yaml` that do not name a known rate
/// type or recurrence are skipped with a warning.
///
/// # Example
///
/// ```no_run
/// use support_estimator::config::ConfigLoader;
/// use support_estimator::models::RateType;
///
/// let loader = ConfigLoader::load("./config/ndis").unwrap();
/// let rate = loader.schedule().rates().get(RateType::Saturday);
/// println!("Saturday rate: {:?}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a required field
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<Self> {
        let path = path.as_ref();

        let schedule_file = Self::load_yaml::<ScheduleFile>(&path.join("schedule.yaml"))?;
        let rates_file = Self::load_yaml::<RatesFile>(&path.join("rates.yaml"))?;
        let recurrence_file = Self::load_yaml::<RecurrenceFile>(&path.join("recurrence.yaml"))?;

        let rates = RateTable::new(Self::typed_entries(
            rates_file.rates,
            RateType::parse,
            "rates.yaml",
        ));
        let recurrence = RecurrenceTable::new(Self::typed_entries(
            recurrence_file.multipliers,
            Recurrence::parse,
            "recurrence.yaml",
        ));

        for warning in Self::schedule_warnings(&rates, &schedule_file.planning) {
            warn!(config_dir = %path.display(), "{}", warning);
        }

        debug!(
            code = %schedule_file.schedule.code,
            rates = rates.len(),
            "Loaded rate schedule"
        );

        Ok(Self {
            schedule: RateSchedule::new(
                schedule_file.schedule,
                rates,
                recurrence,
                schedule_file.planning,
            ),
        })
    }

    /// Wraps the built-in schedule without touching the filesystem.
    pub fn builtin() -> Self {
        Self {
            schedule: RateSchedule::ndis_default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EstimatorResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EstimatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EstimatorError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Lists values that load but will make some estimates fail.
    fn schedule_warnings(rates: &RateTable, planning: &PlanningConfig) -> Vec<String> {
        let mut warnings = Vec::new();
        for rate_type in RateType::ALL {
            match rates.get(rate_type) {
                None => warnings.push(format!("Rate type {} missing from schedule", rate_type)),
                Some(rate) if rate <= Decimal::ZERO => {
                    warnings.push(format!("Non-positive rate {} for {}", rate, rate_type))
                }
                Some(_) => {}
            }
        }
        if planning.default_duration_weeks <= Decimal::ZERO {
            warnings.push(format!(
                "Non-positive default_duration_weeks {}",
                planning.default_duration_weeks
            ));
        }
        warnings
    }

    /// Converts string-keyed entries into typed keys, dropping unknown keys.
    fn typed_entries<K>(
        entries: HashMap<String, Decimal>,
        parse: fn(&str) -> Option<K>,
        file: &str,
    ) -> Vec<(K, Decimal)> {
        entries
            .into_iter()
            .filter_map(|(key, value)| match parse(&key) {
                Some(typed) => Some((typed, value)),
                None => {
                    warn!(file = file, key = %key, "Skipping unknown key");
                    None
                }
            })
            .collect()
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }
}
