//! Contribution room models.
//!
//! This module contains the [`YearlyAmount`], [`RightsResult`] and
//! [`EligibilityOutcome`] types produced by the rights calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The contribution room granted for a single calendar year.
///
/// # Example
///
/// ```
/// use celi_engine::models::YearlyAmount;
/// use rust_decimal::Decimal;
///
/// let entry = YearlyAmount {
///     year: 2018,
///     amount: Decimal::from(5500),
/// };
/// assert_eq!(entry.year, 2018);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearlyAmount {
    /// The calendar year.
    pub year: i32,
    /// The room granted that year, in whole dollars.
    pub amount: Decimal,
}

/// Accumulated contribution room up to a reference year.
///
/// `yearly` is ordered by ascending year and `total` is always the sum of
/// its amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightsResult {
    /// The sum of all yearly amounts.
    pub total: Decimal,
    /// Per-year breakdown, oldest first.
    pub yearly: Vec<YearlyAmount>,
}

impl RightsResult {
    /// Creates an empty result with a zero total.
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            yearly: Vec::new(),
        }
    }

    /// Appends a year to the breakdown and adds its amount to the total.
    pub fn push(&mut self, entry: YearlyAmount) {
        self.total += entry.amount;
        self.yearly.push(entry);
    }

    /// Returns the number of years contributing to the total.
    pub fn year_count(&self) -> usize {
        self.yearly.len()
    }
}

/// The outcome of a rights computation.
///
/// Exactly one variant is produced per computation. `NotYetEligible` is a
/// normal result and is distinct from an eligible result with a zero total.
///
/// # Example
///
/// ```
/// use celi_engine::models::EligibilityOutcome;
///
/// let outcome = EligibilityOutcome::NotYetEligible { eligible_year: 2028 };
/// assert!(!outcome.is_eligible());
/// assert_eq!(outcome.eligible_year(), 2028);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    /// The holder has reached the age of majority by the reference year.
    Eligible {
        /// The first year room begins accruing.
        eligible_year: i32,
        /// The accumulated room.
        rights: RightsResult,
    },
    /// The reference year precedes the eligibility year.
    NotYetEligible {
        /// The year the holder will become eligible.
        eligible_year: i32,
    },
}

impl EligibilityOutcome {
    /// Returns the eligibility year for either variant.
    pub fn eligible_year(&self) -> i32 {
        match self {
            Self::Eligible { eligible_year, .. } | Self::NotYetEligible { eligible_year } => {
                *eligible_year
            }
        }
    }

    /// Returns true for the `Eligible` variant.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible { .. })
    }

    /// Returns the accumulated rights, if eligible.
    pub fn rights(&self) -> Option<&RightsResult> {
        match self {
            Self::Eligible { rights, .. } => Some(rights),
            Self::NotYetEligible { .. } => None,
        }
    }
}
