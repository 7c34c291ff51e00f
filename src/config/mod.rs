//! Configuration loading and management for the contribution room engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: program metadata and display settings.
//!
//! # Example
//!
//! ```no_run
//! use celi_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/celi").unwrap();
//! println!("Loaded program: {}", config.program().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_DIR};
pub use types::{DisplayConfig, EngineConfig, ProgramMetadata};
