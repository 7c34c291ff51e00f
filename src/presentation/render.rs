//! Rendering of outcomes and validation errors into display text.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{AGE_OF_MAJORITY, ValidationErrors};
use crate::models::EligibilityOutcome;

use super::currency::CurrencyFormat;

/// Label used for the summary row of the breakdown table.
pub const TOTAL_ROW_LABEL: &str = "Total";

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// The year column (or [`TOTAL_ROW_LABEL`]).
    pub year_label: String,
    /// The formatted amount column.
    pub amount_label: String,
}

/// An [`EligibilityOutcome`] formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedOutcome {
    /// Whether room has started accruing.
    pub eligible: bool,
    /// The eligibility year as text.
    pub eligible_year_label: String,
    /// The formatted total room; absent when not yet eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_label: Option<String>,
    /// A notice for the holder; present when not yet eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// One row per year, oldest first.
    pub rows: Vec<DisplayRow>,
    /// The summary row; absent when not yet eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_row: Option<DisplayRow>,
}

/// Formats an outcome for display.
///
/// The total row is the sum of the displayed rows, which always equals the
/// computed total.
///
/// # Example
///
/// ```
/// use celi_engine::calculation::{ContributionTable, compute_rights};
/// use celi_engine::presentation::{CurrencyFormat, render_outcome};
///
/// let outcome = compute_rights(2000, 2018, &ContributionTable::standard()).unwrap();
/// let rendered = render_outcome(&outcome, &CurrencyFormat::default());
///
/// assert_eq!(rendered.rows.len(), 1);
/// assert_eq!(rendered.rows[0].year_label, "2018");
/// assert_eq!(rendered.total_label.as_deref(), Some("5\u{a0}500\u{a0}$"));
/// ```
pub fn render_outcome(outcome: &EligibilityOutcome, format: &CurrencyFormat) -> RenderedOutcome {
    match outcome {
        EligibilityOutcome::NotYetEligible { eligible_year } => RenderedOutcome {
            eligible: false,
            eligible_year_label: eligible_year.to_string(),
            total_label: None,
            message: Some(not_yet_eligible_message(*eligible_year)),
            rows: Vec::new(),
            total_row: None,
        },
        EligibilityOutcome::Eligible {
            eligible_year,
            rights,
        } => {
            let rows = rights
                .yearly
                .iter()
                .map(|entry| DisplayRow {
                    year_label: entry.year.to_string(),
                    amount_label: format.format(entry.amount),
                })
                .collect();
            let rows_total: Decimal = rights.yearly.iter().map(|entry| entry.amount).sum();

            RenderedOutcome {
                eligible: true,
                eligible_year_label: eligible_year.to_string(),
                total_label: Some(format.format(rights.total)),
                message: None,
                rows,
                total_row: Some(DisplayRow {
                    year_label: TOTAL_ROW_LABEL.to_string(),
                    amount_label: format.format(rows_total),
                }),
            }
        }
    }
}

/// Returns the notice shown to someone who is not yet eligible.
pub fn not_yet_eligible_message(eligible_year: i32) -> String {
    format!(
        "Vous ne serez éligible au CELI qu'en {} (à vos {} ans).",
        eligible_year, AGE_OF_MAJORITY
    )
}

/// Returns the validation messages to display, in check order.
pub fn render_errors(errors: &ValidationErrors) -> Vec<String> {
    errors.messages().into_iter().map(str::to_string).collect()
}
