//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::ContributionTable;
use crate::error::{EngineError, EngineResult};
use crate::presentation::CurrencyFormat;

use super::types::{DisplayConfig, EngineConfig, ProgramMetadata};

/// Default configuration directory, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "./config/celi";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/celi/
/// ├── program.yaml   # Program metadata
/// └── display.yaml   # Display locale and currency
/// ```
///
/// The annual contribution limits are fixed in code and are not read from
/// the directory.
///
/// # Example
///
/// ```no_run
/// use celi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/celi")?;
/// println!("Loaded program: {}", loader.program().name);
/// # Ok::<(), celi_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A required field is empty
    /// - The display locale or currency is not supported
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let program_path = path.join("program.yaml");
        let metadata = Self::load_yaml::<ProgramMetadata>(&program_path)?;
        Self::require_non_empty("code", &metadata.code)?;
        Self::require_non_empty("name", &metadata.name)?;

        let display_path = path.join("display.yaml");
        let display_config = Self::load_yaml::<DisplayConfig>(&display_path)?;
        let currency_format =
            CurrencyFormat::from_tags(&display_config.locale, &display_config.currency)?;

        debug!(
            program = %metadata.code,
            locale = %display_config.locale,
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, currency_format, ContributionTable::standard()),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn require_non_empty(field: &str, value: &str) -> EngineResult<()> {
        if value.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        self.config.program()
    }

    /// Returns the currency format for display.
    pub fn currency_format(&self) -> &CurrencyFormat {
        self.config.currency_format()
    }

    /// Returns the annual contribution limits.
    pub fn table(&self) -> &ContributionTable {
        self.config.table()
    }
}
