//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::ledger::ResultSink;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers, such as
/// the result sink that records committed salary payments.
#[derive(Clone)]
pub struct AppState {
    sink: Arc<dyn ResultSink>,
}

impl AppState {
    /// Creates a new application state with the given result sink.
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        Self { sink }
    }

    /// Returns a reference to the result sink.
    pub fn sink(&self) -> &Arc<dyn ResultSink> {
        &self.sink
    }
}
