//! Calculation logic for the Support Estimator.
//!
//! This module contains all the calculation functions for estimating support
//! plans, including rate and recurrence lookup, occurrences-per-week
//! resolution, weekly cost, plan cost, budget-to-hours conversion, period
//! conversions, and the quote and budget summaries built from them.

mod budget_hours;
mod estimate;
mod occurrences;
mod period;
mod plan_cost;
mod rate_lookup;
mod weekly_cost;

pub use budget_hours::{hours_from_budget, total_hours_from_budget};
pub use estimate::{build_budget_estimate, build_quote};
pub use occurrences::{day_count_occurrences, occurrences_per_week};
pub use period::{fortnightly_from_weekly, monthly_from_weekly};
pub use plan_cost::{DEFAULT_PLAN_WEEKS, default_plan_weeks, total_plan_cost};
pub use rate_lookup::{DEFAULT_RATE_TYPE, lookup_multiplier, lookup_rate, lookup_rate_by_key};
pub use weekly_cost::{WeeklyCostResult, calculate_weekly_cost, shift_weekly_cost};
