//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `ioc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ioc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ioc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "IOC";

/// Separator between nested keys in environment variables
/// (e.g. `IOC_RESOLVER__MAX_DEPTH`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// RESOLVER CONSTANTS
// ============================================================================

/// Cycle detection is on unless configured otherwise
pub const DEFAULT_DETECT_CYCLES: bool = true;

/// Per-construction debug events are off by default
pub const DEFAULT_TRACE_RESOLUTION: bool = false;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "IOC_LOG";

/// Default log file stem when file output has no stem
pub const LOG_FILE_STEM: &str = "ioc";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;
