//! Contribution room accumulation.
//!
//! Sums the table amounts between the effective start year and the
//! reference year.

use crate::models::{AuditStep, RightsResult};

use super::limits::ContributionTable;

/// The accumulated rights and the audit step recording the sum.
#[derive(Debug, Clone)]
pub struct RightsAccumulation {
    /// The total and per-year breakdown.
    pub rights: RightsResult,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Accumulates contribution room for `start_year..=reference_year`.
///
/// Years with no table entry are skipped: a year past the last published
/// limit contributes nothing rather than repeating the last known amount.
///
/// # Examples
///
/// ```
/// use celi_engine::calculation::{ContributionTable, accumulate_rights};
/// use rust_decimal::Decimal;
///
/// let table = ContributionTable::standard();
/// let result = accumulate_rights(2009, 2012, &table, 1);
///
/// assert_eq!(result.rights.total, Decimal::from(20000));
/// assert_eq!(result.rights.yearly.len(), 4);
/// ```
pub fn accumulate_rights(
    start_year: i32,
    reference_year: i32,
    table: &ContributionTable,
    step_number: u32,
) -> RightsAccumulation {
    // Table entries come back in ascending year order
    let mut rights = RightsResult::empty();
    for entry in table.entries_between(start_year, reference_year) {
        rights.push(entry);
    }

    // Years in range with no published limit
    let requested_years = (reference_year - start_year + 1).max(0);
    let skipped_years = requested_years - rights.year_count() as i32;

    let reasoning = if skipped_years > 0 {
        format!(
            "Summed {} year(s) from {} to {} = ${}; {} year(s) have no published limit",
            rights.year_count(),
            start_year,
            reference_year,
            rights.total,
            skipped_years
        )
    } else {
        format!(
            "Summed {} year(s) from {} to {} = ${}",
            rights.year_count(),
            start_year,
            reference_year,
            rights.total
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "contribution_room".to_string(),
        rule_name: "Contribution Room Accumulation".to_string(),
        input: serde_json::json!({
            "start_year": start_year,
            "reference_year": reference_year
        }),
        output: serde_json::json!({
            "total": rights.total.to_string(),
            "years_counted": rights.year_count(),
            "years_without_limit": skipped_years
        }),
        reasoning,
    };

    RightsAccumulation { rights, audit_step }
}
