//! Support Estimator for disability support plans
//!
//! This crate converts planned support shifts into weekly, monthly and plan
//! costs, and converts a funding budget back into affordable support hours,
//! using an injected table of hourly rates and recurrence multipliers.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
