//! Payroll computation engine for monthly salary runs.
//!
//! This crate computes a fully itemized monthly salary for an employee:
//! base pay prorated over the employment window, allowances, earnings
//! add-ons, fixed and obligation-based deductions, and the resulting net
//! pay. The computation is a pure function; persistence and obligation
//! lookups live behind the collaborator traits in [`ledger`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod ledger;
pub mod models;
