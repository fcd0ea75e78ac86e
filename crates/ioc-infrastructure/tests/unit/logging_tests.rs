//! Logging Tests

use std::io::Write;

use ioc_domain::error::Error;
use ioc_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use ioc_infrastructure::logging::{LoggingConfig, file_appender, init_logging, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(config).is_err());
}

#[test]
fn test_file_appender_disabled_without_output() {
    let appender = file_appender(&LoggingConfig::default()).unwrap();
    assert!(appender.is_none());
}

#[test]
fn test_file_appender_writes_dated_file() {
    let dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        file_output: Some(dir.path().join("resolver.log")),
        max_files: 2,
        ..LoggingConfig::default()
    };

    let mut appender = file_appender(&config).unwrap().expect("file output configured");
    appender.write_all(b"resolved dyn Clock\n").unwrap();
    appender.flush().unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("resolver."), "unexpected log file {}", names[0]);
}

#[test]
fn test_file_appender_rejects_zero_max_files() {
    let dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        file_output: Some(dir.path().join("resolver.log")),
        max_files: 0,
        ..LoggingConfig::default()
    };

    match file_appender(&config) {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("max_files")),
        _ => panic!("Expected Configuration error"),
    }
}
