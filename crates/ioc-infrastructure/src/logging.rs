//! Structured logging with tracing
//!
//! Configures the global subscriber: plain or JSON output on stdout, an
//! optional daily-rolled log file pruned to `max_files`, and an `IOC_LOG`
//! filter override.

use std::ffi::OsStr;
use std::path::Path;

use ioc_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV};

/// Initialize logging with the provided configuration
///
/// Fails if the level is invalid or a global subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = file_appender(&config)?;

    // json and plain layers have different types
    let installed = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    };

    installed.map_err(|err| {
        Error::configuration_with_source("Failed to install global tracing subscriber", err)
    })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Build the daily rolling appender for `file_output`, if any
///
/// Files are named `<stem>.<date>` next to the configured path; only the
/// newest `max_files` are kept.
pub fn file_appender(config: &LoggingConfig) -> Result<Option<RollingFileAppender>> {
    let Some(path) = config.file_output.as_ref() else {
        return Ok(None);
    };
    if config.max_files == 0 {
        return Err(Error::configuration(
            "Logging max_files cannot be 0 when file output is enabled",
        ));
    }

    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(LOG_FILE_STEM))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(stem)
        .max_log_files(config.max_files)
        .build(directory)
        .map(Some)
        .map_err(|err| {
            Error::configuration_with_source(
                format!("Failed to open log directory {}", directory.display()),
                err,
            )
        })
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
