//! Configuration types for the contribution room engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::ContributionTable;
use crate::presentation::CurrencyFormat;

/// Metadata about the savings program.
///
/// Contains identifying information about the program, including its code,
/// name, jurisdiction, and source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMetadata {
    /// The program code (e.g., "CELI").
    pub code: String,
    /// The human-readable name of the program.
    pub name: String,
    /// The jurisdiction that defines the annual limits (e.g., "CA").
    pub jurisdiction: String,
    /// URL to the official program documentation.
    pub source_url: String,
}

/// Display settings from display.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// The locale tag used to format amounts (e.g., "fr-CA").
    pub locale: String,
    /// The ISO currency code (e.g., "CAD").
    pub currency: String,
}

/// The complete engine configuration.
///
/// Aggregates the program metadata, the resolved currency format, and the
/// annual contribution limits.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Program metadata.
    metadata: ProgramMetadata,
    /// Formatting used when rendering amounts.
    currency_format: CurrencyFormat,
    /// Annual contribution limits.
    table: ContributionTable,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: ProgramMetadata,
        currency_format: CurrencyFormat,
        table: ContributionTable,
    ) -> Self {
        Self {
            metadata,
            currency_format,
            table,
        }
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the currency format.
    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.currency_format
    }

    /// Returns the annual contribution limits.
    pub fn table(&self) -> &ContributionTable {
        &self.table
    }
}
