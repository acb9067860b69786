//! Response types for the payroll engine API.
//!
//! This module defines the success envelope and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::SalaryComputationResult;

/// Success envelope returned by the computation endpoints.
///
/// The nondeterministic identifiers (computation id, timestamp) live here
/// rather than in the result itself, so the result stays reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryComputationResponse {
    /// Unique id of this computation request.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub computed_at: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The employee the computation is for.
    pub employee_id: String,
    /// The persisted id, present when the payment was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted_id: Option<Uuid>,
    /// The computed salary breakdown.
    pub result: SalaryComputationResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input field '{}': {}", field, message),
                    "The request contains an out-of-range or inconsistent value",
                ),
            },
            PayrollError::InvalidPeriod { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid pay period: {}-{:02}", year, month),
                    "The pay period does not resolve to a valid calendar month",
                ),
            },
            PayrollError::ZeroWorkingDays {
                employed_days,
                leave_days,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "ZERO_WORKING_DAYS",
                    format!(
                        "Zero working days: {} employed days minus {} leave days",
                        employed_days, leave_days
                    ),
                    "A payment with no worked time cannot be recorded; check leave days and employment dates",
                ),
            },
            PayrollError::EmployeeNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", employee_id),
                    "The employee does not exist in the directory",
                ),
            },
            PayrollError::LedgerUnavailable { ledger, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "LEDGER_UNAVAILABLE",
                    format!("Ledger '{}' query failed: {}", ledger, message),
                    "An obligation lookup failed; the computation was aborted",
                ),
            },
        }
    }
}
