//! Core data models for the CELI contribution room engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod rights;

pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use rights::{EligibilityOutcome, RightsResult, YearlyAmount};
