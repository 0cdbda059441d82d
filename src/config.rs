//! Configuration for log-converter
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::record::{needs_conversion, Endianness};

/// Main configuration for one conversion run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Binary log file to convert
    pub input_path: PathBuf,

    /// Byte order the capture was written in; `None` means host order
    pub endianness: Option<Endianness>,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Capacity of the buffered writer wrapped around stdout (in bytes)
    pub output_buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            endianness: None,
            output_buffer_capacity: 64 * 1024, // 64 KB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether each word must be byte-reversed on this host
    pub fn needs_conversion(&self) -> bool {
        needs_conversion(self.endianness)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the binary log file to read
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Set the byte order of the capture
    pub fn endianness(mut self, endianness: Option<Endianness>) -> Self {
        self.config.endianness = endianness;
        self
    }

    /// Set the output buffer capacity (in bytes)
    pub fn output_buffer_capacity(mut self, bytes: usize) -> Self {
        self.config.output_buffer_capacity = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
