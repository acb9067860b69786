//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for the salary computation
//! endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_salary;
use crate::error::PayrollResult;
use crate::models::{CompensationProfile, EmploymentWindow, PayPeriod, SalaryComputationResult};

use super::request::SalaryComputationRequest;
use super::response::{ApiError, ApiErrorResponse, SalaryComputationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salaries", post(record_salary_handler))
        .route("/salaries/preview", post(preview_salary_handler))
        .with_state(state)
}

/// Handler for POST /salaries/preview.
///
/// Computes the salary breakdown without persisting anything, letting the
/// caller inspect it before committing.
async fn preview_salary_handler(
    State(_state): State<AppState>,
    payload: Result<Json<SalaryComputationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary preview request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let employee_id = request.employee_id.clone();

    match run_computation(request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                net_salary = %result.net_salary,
                "Salary preview completed"
            );
            success_response(employee_id, result, None)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err.error.message, "Salary preview failed");
            err.into_response()
        }
    }
}

/// Handler for POST /salaries.
///
/// Computes the salary breakdown and records the payment through the
/// configured result sink.
async fn record_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryComputationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary payment request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let employee_id = request.employee_id.clone();
    let period = match PayPeriod::try_from(request.period) {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid pay period");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match run_computation(request) {
        Ok(result) => {
            match state.sink().record_salary_payment(&employee_id, period, &result) {
                Ok(persisted_id) => {
                    info!(
                        correlation_id = %correlation_id,
                        employee_id = %employee_id,
                        persisted_id = %persisted_id,
                        net_salary = %result.net_salary,
                        "Salary payment recorded"
                    );
                    success_response(employee_id, result, Some(persisted_id))
                }
                Err(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "Recording salary payment failed");
                    ApiErrorResponse::from(err).into_response()
                }
            }
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err.error.message, "Salary computation failed");
            err.into_response()
        }
    }
}

/// Converts request types to domain types and runs the pure computation.
fn run_computation(
    request: SalaryComputationRequest,
) -> Result<SalaryComputationResult, ApiErrorResponse> {
    let profile: CompensationProfile = request.profile.into();
    let period = PayPeriod::try_from(request.period)?;
    let employment: EmploymentWindow = request.employment.into();

    let result: PayrollResult<SalaryComputationResult> = compute_salary(
        &profile,
        period,
        &request.attendance,
        &employment,
        &request.earnings,
        &request.deductions,
        &request.loan_installments,
        &request.advance_installments,
    );
    result.map_err(Into::into)
}

/// Builds the success envelope around a computation result.
fn success_response(
    employee_id: String,
    result: SalaryComputationResult,
    persisted_id: Option<Uuid>,
) -> axum::response::Response {
    let response = SalaryComputationResponse {
        computation_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id,
        persisted_id,
        result,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handles JSON parsing errors consistently for both endpoints.
fn parse_payload(
    payload: Result<Json<SalaryComputationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<SalaryComputationRequest, axum::response::Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}
