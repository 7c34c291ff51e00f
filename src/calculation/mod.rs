//! Calculation logic for the CELI contribution room engine.
//!
//! This module contains the program rules and annual limit table, input
//! parsing and validation, eligibility determination, and the accumulation
//! of contribution room up to a reference year.

mod accumulation;
mod eligibility;
mod limits;
mod rights;
mod rules;
mod validation;

pub use accumulation::{RightsAccumulation, accumulate_rights};
pub use eligibility::{EligibilityDetermination, determine_eligibility};
pub use limits::{ANNUAL_LIMITS, ContributionTable};
pub use rights::{RightsCalculation, calculate_rights, compute_rights};
pub use rules::{
    AGE_OF_MAJORITY, MAX_REFERENCE_YEAR, MIN_BIRTH_YEAR, PROGRAM_START_YEAR,
    effective_start_year, eligibility_year,
};
pub use validation::{
    ValidatedYears, ValidationCode, ValidationErrors, ValidationIssue, YearField, validate_inputs,
};
