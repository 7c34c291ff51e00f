//! Error types for the CELI contribution room engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating input, or preparing results for display.

use thiserror::Error;

use crate::calculation::ValidationErrors;

/// The main error type for the CELI contribution room engine.
///
/// A `NotYetEligible` outcome is never reported through this type: being
/// too young for the account is a normal result, not a failure.
///
/// # Example
///
/// ```
/// use celi_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/program.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/program.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The requested display locale or currency is not supported.
    #[error("Unsupported display format: locale '{locale}', currency '{currency}'")]
    UnsupportedDisplayFormat {
        /// The requested locale tag.
        locale: String,
        /// The requested currency code.
        currency: String,
    },

    /// The submitted birth year and reference year failed validation.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
