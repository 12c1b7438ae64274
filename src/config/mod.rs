//! Configuration loading and management for the Support Estimator.
//!
//! This module provides the rate and recurrence tables the calculations run
//! against, either built in or loaded from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use support_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ndis").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PlanningConfig, RateSchedule, RateTable, RecurrenceTable, ScheduleMetadata};
