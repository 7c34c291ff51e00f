//! Eligibility determination.
//!
//! This module decides whether a holder has reached the age of majority by
//! the reference year, and from which year room starts counting.

use crate::models::AuditStep;

use super::rules::{AGE_OF_MAJORITY, PROGRAM_START_YEAR, effective_start_year, eligibility_year};
use super::validation::ValidatedYears;

/// The result of an eligibility check, including the audit step.
#[derive(Debug, Clone)]
pub struct EligibilityDetermination {
    /// Birth year plus the age of majority.
    pub eligible_year: i32,
    /// The first year room accrues, when eligible.
    pub effective_start_year: Option<i32>,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

impl EligibilityDetermination {
    /// Returns true if the reference year is on or after the eligibility year.
    pub fn is_eligible(&self) -> bool {
        self.effective_start_year.is_some()
    }
}

/// Determines the eligibility year and effective start year.
///
/// # Arguments
///
/// * `years` - The validated birth and reference years
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use celi_engine::calculation::{YearField, determine_eligibility, validate_inputs};
///
/// let years = validate_inputs(&YearField::Year(1985), &YearField::Year(2012)).unwrap();
/// let result = determine_eligibility(years, 1);
///
/// assert_eq!(result.eligible_year, 2003);
/// assert_eq!(result.effective_start_year, Some(2009));
/// ```
pub fn determine_eligibility(years: ValidatedYears, step_number: u32) -> EligibilityDetermination {
    let birth_year = years.birth_year();
    let reference_year = years.reference_year();
    let eligible_year = eligibility_year(birth_year);

    // Not of age yet: no room, and no start year
    if eligible_year > reference_year {
        let audit_step = AuditStep {
            step_number,
            rule_id: "eligibility_year".to_string(),
            rule_name: "Eligibility Year".to_string(),
            input: serde_json::json!({
                "birth_year": birth_year,
                "reference_year": reference_year,
                "age_of_majority": AGE_OF_MAJORITY
            }),
            output: serde_json::json!({
                "eligible_year": eligible_year,
                "eligible": false
            }),
            reasoning: format!(
                "{} + {} = {}, which is after reference year {} - not yet eligible",
                birth_year, AGE_OF_MAJORITY, eligible_year, reference_year
            ),
        };

        return EligibilityDetermination {
            eligible_year,
            effective_start_year: None,
            audit_step,
        };
    }

    // Room never starts before the program existed
    let start_year = effective_start_year(eligible_year);
    let reasoning = if start_year > eligible_year {
        format!(
            "{} + {} = {}; room starts at program launch in {}",
            birth_year, AGE_OF_MAJORITY, eligible_year, PROGRAM_START_YEAR
        )
    } else {
        format!(
            "{} + {} = {}; room starts the year the age of majority is reached",
            birth_year, AGE_OF_MAJORITY, eligible_year
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "eligibility_year".to_string(),
        rule_name: "Eligibility Year".to_string(),
        input: serde_json::json!({
            "birth_year": birth_year,
            "reference_year": reference_year,
            "age_of_majority": AGE_OF_MAJORITY
        }),
        output: serde_json::json!({
            "eligible_year": eligible_year,
            "eligible": true,
            "effective_start_year": start_year
        }),
        reasoning,
    };

    EligibilityDetermination {
        eligible_year,
        effective_start_year: Some(start_year),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{YearField, validate_inputs};

    fn years(birth: i32, reference: i32) -> ValidatedYears {
        validate_inputs(&YearField::Year(birth), &YearField::Year(reference)).unwrap()
    }

    #[test]
    fn test_eligible_in_reference_year() {
        let result = determine_eligibility(years(2000, 2018), 1);
        assert_eq!(result.eligible_year, 2018);
        assert_eq!(result.effective_start_year, Some(2018));
        assert!(result.is_eligible());
    }

    #[test]
    fn test_not_yet_eligible() {
        let result = determine_eligibility(years(2010, 2020), 1);
        assert_eq!(result.eligible_year, 2028);
        assert_eq!(result.effective_start_year, None);
        assert!(!result.is_eligible());
        assert_eq!(result.audit_step.output["eligible"], false);
        assert!(result.audit_step.reasoning.contains("not yet eligible"));
    }

    #[test]
    fn test_start_year_clamped_to_program_launch() {
        let result = determine_eligibility(years(1985, 2012), 1);
        assert_eq!(result.eligible_year, 2003);
        assert_eq!(result.effective_start_year, Some(2009));
        assert!(result.audit_step.reasoning.contains("program launch"));
    }

    #[test]
    fn test_one_year_short_is_not_eligible() {
        let result = determine_eligibility(years(2001, 2018), 1);
        assert_eq!(result.eligible_year, 2019);
        assert!(!result.is_eligible());
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = determine_eligibility(years(1990, 2025), 4);
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "eligibility_year");
        assert_eq!(result.audit_step.input["age_of_majority"], 18);
    }
}
