//! HTTP request handlers for the Support Estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_budget_estimate, build_quote};
use crate::error::EstimatorError;
use crate::models::{Budget, Shift};

use super::request::{BudgetRequest, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/rates", get(rates_handler))
        .route("/quote", post(quote_handler))
        .route("/budget", post(budget_handler))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Handler for GET /rates.
///
/// Lists the loaded rate and recurrence tables so a UI can populate its
/// selection lists.
async fn rates_handler(State(state): State<AppState>) -> Json<RatesResponse> {
    Json(RatesResponse::from(state.schedule()))
}

/// Handler for POST /quote.
///
/// Costs a list of shifts per week, fortnight, month and plan duration.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let schedule = state.schedule();
    let duration_weeks = request
        .duration_weeks
        .unwrap_or(schedule.planning().default_duration_weeks);
    let shifts: Vec<Shift> = request
        .shifts
        .into_iter()
        .enumerate()
        .map(|(position, shift)| shift.into_shift(position))
        .collect();

    let start_time = Instant::now();
    match build_quote(&shifts, schedule, request.basis, duration_weeks) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                quote_id = %quote.quote_id,
                shifts_count = shifts.len(),
                weekly_cost = %quote.totals.weekly_cost,
                plan_cost = %quote.totals.plan_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Quote completed successfully"
            );
            json_response(StatusCode::OK, Json(quote))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /budget.
///
/// Works out the support hours a budget affords at the preferred rate.
async fn budget_handler(
    State(state): State<AppState>,
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing budget request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let schedule = state.schedule();
    let duration_weeks = request
        .duration_weeks
        .unwrap_or(schedule.planning().default_duration_weeks);
    let budget: Budget = request.into();

    let start_time = Instant::now();
    match build_budget_estimate(&budget, schedule, duration_weeks) {
        Ok(estimate) => {
            info!(
                correlation_id = %correlation_id,
                estimate_id = %estimate.estimate_id,
                rate_type = %estimate.rate_type,
                hours_per_week = %estimate.hours_per_week,
                duration_us = start_time.elapsed().as_micros(),
                "Budget estimate completed successfully"
            );
            json_response(StatusCode::OK, Json(estimate))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Budget estimate failed"
            );
            error_response(err)
        }
    }
}

fn error_response(err: EstimatorError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, Json(api_error.error))
}

fn json_response(status: StatusCode, body: impl IntoResponse) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, Json(error))
}
