//! HTTP API module for the Support Estimator.
//!
//! This module exposes the rate tables and the quote and budget calculations
//! to a UI layer over JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BudgetRequest, QuoteRequest, ShiftRequest};
pub use response::{ApiError, RateEntry, RatesResponse, RecurrenceEntry};
pub use state::AppState;
