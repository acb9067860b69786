//! Calculation logic for the payroll computation engine.
//!
//! This module contains the pure salary computation: effective employment
//! window determination, working-day accounting, base salary proration,
//! deduction aggregation, and the `compute_salary` / `preview_salary`
//! orchestrators that tie them together.

mod calculator;
mod compute;
mod deductions;
mod effective_window;
mod proration;
mod working_days;

pub use calculator::PayrollCalculator;
pub use compute::{compute_salary, preview_salary};
pub use deductions::aggregate_deductions;
pub use effective_window::{EffectiveWindow, determine_effective_window};
pub use proration::{ProratedBase, prorate_base_salary};
pub use working_days::calculate_working_days;
