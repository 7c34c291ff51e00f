//! Input parsing and validation.
//!
//! Form values arrive as loosely-typed text. [`YearField::parse`] turns each
//! one into a typed field, and [`validate_inputs`] checks the pair, reporting
//! every violation rather than stopping at the first.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::{MAX_REFERENCE_YEAR, MIN_BIRTH_YEAR, PROGRAM_START_YEAR};

/// A year as submitted by the caller, after parsing.
///
/// # Example
///
/// ```
/// use celi_engine::calculation::YearField;
///
/// assert_eq!(YearField::parse(Some(" 1990 ")), YearField::Year(1990));
/// assert_eq!(YearField::parse(Some("")), YearField::Missing);
/// assert_eq!(
///     YearField::parse(Some("1990abc")),
///     YearField::Malformed("1990abc".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearField {
    /// No value was supplied.
    Missing,
    /// A value was supplied but is not an integer.
    Malformed(String),
    /// A well-formed integer year.
    Year(i32),
}

impl YearField {
    /// Parses a raw form value.
    ///
    /// Surrounding whitespace is ignored. Blank input counts as missing. The
    /// whole remaining text must be an integer; trailing characters make the
    /// value malformed.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Missing;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match trimmed.parse::<i32>() {
            Ok(year) => Self::Year(year),
            Err(_) => Self::Malformed(raw.to_string()),
        }
    }

    /// Returns the parsed year, if any.
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Year(year) => Some(*year),
            Self::Missing | Self::Malformed(_) => None,
        }
    }
}

impl From<i32> for YearField {
    fn from(year: i32) -> Self {
        Self::Year(year)
    }
}

impl From<Option<i32>> for YearField {
    fn from(year: Option<i32>) -> Self {
        year.map_or(Self::Missing, Self::Year)
    }
}

/// Identifies which validation rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    /// Birth year missing, malformed, or out of range.
    InvalidBirthYear,
    /// Reference year missing, malformed, or out of range.
    InvalidReferenceYear,
    /// Reference year earlier than the birth year.
    ReferenceBeforeBirth,
}

impl ValidationCode {
    /// The input field the rule applies to.
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidBirthYear => "birth_year",
            Self::InvalidReferenceYear | Self::ReferenceBeforeBirth => "reference_year",
        }
    }

    /// The user-facing message, in the display locale.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidBirthYear => "Veuillez entrer une année de naissance valide.",
            Self::InvalidReferenceYear => "L'année courante doit être entre 2009 et 2030.",
            Self::ReferenceBeforeBirth => {
                "L'année courante ne peut pas être antérieure à l'année de naissance."
            }
        }
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The rule that failed.
    pub code: ValidationCode,
    /// The input field concerned.
    pub field: String,
    /// A human-readable message.
    pub message: String,
}

impl From<ValidationCode> for ValidationIssue {
    fn from(code: ValidationCode) -> Self {
        Self {
            code,
            field: code.field().to_string(),
            message: code.message().to_string(),
        }
    }
}

/// Every validation failure for one submission, in check order.
///
/// Never empty when returned from [`validate_inputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Returns the individual issues.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns the messages in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.message.as_str()).collect()
    }

    /// Returns true if an issue with `code` is present.
    pub fn contains(&self, code: ValidationCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A birth year and reference year that passed validation.
///
/// Only [`validate_inputs`] constructs this type, so holding one guarantees
/// `1900 <= birth_year <= reference_year` and
/// `2009 <= reference_year <= 2030`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedYears {
    birth_year: i32,
    reference_year: i32,
}

impl ValidatedYears {
    /// The validated birth year.
    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// The validated reference year.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }
}

/// Validates a birth year and reference year.
///
/// All three checks run independently and every failure is reported:
///
/// 1. birth year missing, malformed, before 1900, or after the reference year
/// 2. reference year missing, malformed, or outside 2009..=2030
/// 3. reference year before the birth year
///
/// Comparisons between the two fields only run when both are integers.
///
/// # Examples
///
/// ```
/// use celi_engine::calculation::{ValidationCode, YearField, validate_inputs};
///
/// let years = validate_inputs(&YearField::Year(1990), &YearField::Year(2025)).unwrap();
/// assert_eq!(years.birth_year(), 1990);
///
/// let errors = validate_inputs(&YearField::Year(1800), &YearField::Year(2035)).unwrap_err();
/// assert!(errors.contains(ValidationCode::InvalidBirthYear));
/// assert!(errors.contains(ValidationCode::InvalidReferenceYear));
/// ```
pub fn validate_inputs(
    birth: &YearField,
    reference: &YearField,
) -> Result<ValidatedYears, ValidationErrors> {
    let mut issues = Vec::new();

    let birth_ok = match birth.value() {
        Some(b) => b >= MIN_BIRTH_YEAR && reference.value().is_none_or(|r| b <= r),
        None => false,
    };
    if !birth_ok {
        issues.push(ValidationCode::InvalidBirthYear.into());
    }

    let reference_ok = reference
        .value()
        .is_some_and(|r| (PROGRAM_START_YEAR..=MAX_REFERENCE_YEAR).contains(&r));
    if !reference_ok {
        issues.push(ValidationCode::InvalidReferenceYear.into());
    }

    if let (Some(b), Some(r)) = (birth.value(), reference.value()) {
        if r < b {
            issues.push(ValidationCode::ReferenceBeforeBirth.into());
        }
    }

    match (birth.value(), reference.value()) {
        (Some(birth_year), Some(reference_year)) if issues.is_empty() => Ok(ValidatedYears {
            birth_year,
            reference_year,
        }),
        _ => Err(ValidationErrors { issues }),
    }
}
