//! Program rules for the CELI account.
//!
//! These are the jurisdiction-defined constants that drive eligibility and
//! the accepted input ranges.

/// Age at which contribution room starts accruing.
pub const AGE_OF_MAJORITY: i32 = 18;

/// First calendar year of the program.
pub const PROGRAM_START_YEAR: i32 = 2009;

/// Last reference year accepted for planning.
pub const MAX_REFERENCE_YEAR: i32 = 2030;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Returns the year a person born in `birth_year` reaches the age of majority.
///
/// # Examples
///
/// ```
/// use celi_engine::calculation::eligibility_year;
///
/// assert_eq!(eligibility_year(2000), 2018);
/// ```
pub fn eligibility_year(birth_year: i32) -> i32 {
    birth_year + AGE_OF_MAJORITY
}

/// Returns the first year that can count towards contribution room.
///
/// Room never accrues before the program existed, so the eligibility year is
/// clamped to [`PROGRAM_START_YEAR`].
pub fn effective_start_year(eligible_year: i32) -> i32 {
    eligible_year.max(PROGRAM_START_YEAR)
}
