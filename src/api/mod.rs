//! HTTP API module for the payroll computation engine.
//!
//! This module provides the REST endpoints for computing and recording
//! monthly salary payments.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SalaryComputationRequest;
pub use response::{ApiError, SalaryComputationResponse};
pub use state::AppState;
