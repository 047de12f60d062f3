//! Configuration for studentdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Data file used when none is given
pub const DEFAULT_DATA_FILE: &str = "students.txt";

/// Main configuration for a studentdb session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat file the store is bound to (loaded on open, saved on close)
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Lifecycle Configuration
    // -------------------------------------------------------------------------
    /// Write the store back to `data_file` when the session ends
    pub save_on_close: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            save_on_close: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable saving when the session ends
    pub fn save_on_close(mut self, enabled: bool) -> Self {
        self.config.save_on_close = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
