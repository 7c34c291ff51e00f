//! Display formatting for calculation outcomes.
//!
//! This module turns [`EligibilityOutcome`](crate::models::EligibilityOutcome)
//! values and validation errors into locale-formatted text. It performs no
//! calculation of its own.

mod currency;
mod render;

pub use currency::{CurrencyFormat, SUPPORTED_CURRENCY, SUPPORTED_LOCALE};
pub use render::{
    DisplayRow, RenderedOutcome, TOTAL_ROW_LABEL, not_yet_eligible_message, render_errors,
    render_outcome,
};
