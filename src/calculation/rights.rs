//! Rights computation.
//!
//! Combines validation, eligibility and accumulation into the single
//! entry point used by callers.

use tracing::debug;

use crate::models::{AuditStep, EligibilityOutcome};

use super::accumulation::accumulate_rights;
use super::eligibility::determine_eligibility;
use super::limits::ContributionTable;
use super::validation::{ValidatedYears, ValidationErrors, YearField, validate_inputs};

/// The outcome of a rights calculation and the steps that produced it.
#[derive(Debug, Clone)]
pub struct RightsCalculation {
    /// The eligibility outcome.
    pub outcome: EligibilityOutcome,
    /// Audit steps, in the order they were applied.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates contribution rights for validated years.
///
/// Total over its domain: every [`ValidatedYears`] yields exactly one
/// outcome.
///
/// # Arguments
///
/// * `years` - The validated birth and reference years
/// * `table` - The annual contribution limits
/// * `step_number` - The number of the first audit step
pub fn calculate_rights(
    years: ValidatedYears,
    table: &ContributionTable,
    step_number: u32,
) -> RightsCalculation {
    let eligibility = determine_eligibility(years, step_number);
    let eligible_year = eligibility.eligible_year;
    let mut audit_steps = vec![eligibility.audit_step];

    let Some(start_year) = eligibility.effective_start_year else {
        debug!(
            birth_year = years.birth_year(),
            eligible_year, "Reference year precedes eligibility"
        );
        return RightsCalculation {
            outcome: EligibilityOutcome::NotYetEligible { eligible_year },
            audit_steps,
        };
    };

    let accumulation = accumulate_rights(start_year, years.reference_year(), table, step_number + 1);
    audit_steps.push(accumulation.audit_step);

    debug!(
        birth_year = years.birth_year(),
        reference_year = years.reference_year(),
        total = %accumulation.rights.total,
        "Contribution room accumulated"
    );

    RightsCalculation {
        outcome: EligibilityOutcome::Eligible {
            eligible_year,
            rights: accumulation.rights,
        },
        audit_steps,
    }
}

/// Validates the two years and computes the eligibility outcome.
///
/// Invalid input yields every applicable validation message; a reference
/// year before the eligibility year is an `Ok(NotYetEligible)`.
///
/// # Examples
///
/// ```
/// use celi_engine::calculation::{ContributionTable, compute_rights};
/// use celi_engine::models::EligibilityOutcome;
/// use rust_decimal::Decimal;
///
/// let table = ContributionTable::standard();
///
/// let outcome = compute_rights(1990, 2025, &table).unwrap();
/// assert_eq!(outcome.rights().map(|r| r.total), Some(Decimal::from(102000)));
///
/// let outcome = compute_rights(2010, 2020, &table).unwrap();
/// assert_eq!(outcome, EligibilityOutcome::NotYetEligible { eligible_year: 2028 });
///
/// assert!(compute_rights(1800, 2020, &table).is_err());
/// ```
pub fn compute_rights(
    birth_year: i32,
    reference_year: i32,
    table: &ContributionTable,
) -> Result<EligibilityOutcome, ValidationErrors> {
    let years = validate_inputs(&YearField::Year(birth_year), &YearField::Year(reference_year))?;
    Ok(calculate_rights(years, table, 1).outcome)
}
