//! Configuration types

use std::path::PathBuf;

use ioc_domain::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Resolution engine settings
    pub resolver: ResolverConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Resolution engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of types being resolved on one call chain
    pub max_depth: usize,

    /// Fail with a cycle error when a type re-enters its own resolution
    pub detect_cycles: bool,

    /// Emit a debug event for every constructed component
    pub trace_resolution: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
            detect_cycles: DEFAULT_DETECT_CYCLES,
            trace_resolution: DEFAULT_TRACE_RESOLUTION,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,

    /// Maximum number of daily log files to keep
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_files: LOG_MAX_FILES,
        }
    }
}
