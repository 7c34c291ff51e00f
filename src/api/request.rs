//! Request types for the contribution room API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Years arrive as form values and may be numbers, strings, or
//! anything else a browser form can send.

use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::YearField;

/// A year as it appears in the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    /// A JSON integer.
    Number(i64),
    /// A JSON string, parsed like a form field.
    Text(String),
    /// Any other JSON value; always malformed.
    Other(serde_json::Value),
}

impl From<YearInput> for YearField {
    fn from(input: YearInput) -> Self {
        match input {
            YearInput::Number(n) => match i32::try_from(n) {
                Ok(year) => YearField::Year(year),
                Err(_) => YearField::Malformed(n.to_string()),
            },
            YearInput::Text(text) => YearField::parse(Some(&text)),
            YearInput::Other(value) => YearField::Malformed(value.to_string()),
        }
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The holder's birth year.
    #[serde(default)]
    pub birth_year: Option<YearInput>,
    /// The year up to which room is accumulated.
    ///
    /// `None` when the field is absent, in which case the current calendar
    /// year is used. `Some(None)` is an explicit `null`, which counts as a
    /// missing value.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_year: Option<Option<YearInput>>,
}

/// Wraps a present field in `Some`, so `null` survives as `Some(None)`.
///
/// Only called when the key is in the body; `#[serde(default)]` covers the
/// absent case.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<YearInput>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<YearInput>::deserialize(deserializer).map(Some)
}

impl CalculationRequest {
    /// Creates a request from two integer years.
    pub fn new(birth_year: i32, reference_year: i32) -> Self {
        Self {
            birth_year: Some(YearInput::Number(birth_year.into())),
            reference_year: Some(Some(YearInput::Number(reference_year.into()))),
        }
    }

    /// Returns the parsed birth year.
    pub fn birth_field(&self) -> YearField {
        self.birth_year
            .clone()
            .map_or(YearField::Missing, YearField::from)
    }

    /// Returns the parsed reference year, falling back to `default_year`
    /// when the field was not sent at all.
    pub fn reference_field(&self, default_year: i32) -> YearField {
        match &self.reference_year {
            None => YearField::Year(default_year),
            Some(None) => YearField::Missing,
            Some(Some(input)) => YearField::from(input.clone()),
        }
    }
}
