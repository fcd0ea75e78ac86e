//! Configuration Tests
//!
//! File-based tests use `tempfile` and an explicit config path, so no
//! default location is searched. Tests that mutate environment variables
//! must run sequentially:
//!
//! ```bash
//! cargo test -p ioc-infrastructure --test unit config -- --test-threads=1 --ignored
//! ```

use std::env;
use std::fs;

use ioc_domain::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use ioc_domain::error::Error;
use ioc_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, ResolverConfig, validate_app_config,
};
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("ioc.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_resolver_config_defaults() {
    let config = ResolverConfig::default();
    assert_eq!(config.max_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
    assert!(config.detect_cycles);
    assert!(!config.trace_resolution);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_env_prefix("IOC_TEST_MISSING")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[resolver]
max_depth = 8
detect_cycles = false

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = ConfigLoader::new()
        .with_env_prefix("IOC_TEST_FILE")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.resolver.max_depth, 8);
    assert!(!config.resolver.detect_cycles);
    assert!(!config.resolver.trace_resolution);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_zero_depth_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[resolver]\nmax_depth = 0\n");

    let result = ConfigLoader::new()
        .with_env_prefix("IOC_TEST_ZERO")
        .with_config_path(&path)
        .load();
    match result {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("max_depth")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let config = ConfigBuilder::new()
        .with_logging(ioc_infrastructure::config::LoggingConfig {
            level: "chatty".to_string(),
            ..Default::default()
        })
        .build();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_zero_max_files_is_rejected_only_with_file_output() {
    let mut logging = ioc_infrastructure::config::LoggingConfig {
        max_files: 0,
        ..Default::default()
    };
    let config = ConfigBuilder::new().with_logging(logging.clone()).build();
    assert!(validate_app_config(&config).is_ok());

    logging.file_output = Some("logs/ioc.log".into());
    let config = ConfigBuilder::new().with_logging(logging).build();
    assert!(matches!(
        validate_app_config(&config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_malformed_file_reports_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[resolver]\nmax_depth = \"deep\"\n");

    let result = ConfigLoader::new()
        .with_env_prefix("IOC_TEST_MALFORMED")
        .with_config_path(&path)
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_max_depth(12)
        .with_cycle_detection(true)
        .with_resolution_tracing(true)
        .build();

    let loader = ConfigLoader::new()
        .with_env_prefix("IOC_TEST_SAVE")
        .with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let reloaded = loader.load().unwrap();

    assert_eq!(reloaded, config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[resolver]\nmax_depth = 8\n");
    set_env("IOC_RESOLVER__MAX_DEPTH", "5");
    set_env("IOC_RESOLVER__TRACE_RESOLUTION", "true");

    let result = ConfigLoader::new().with_config_path(&path).load();

    remove_env("IOC_RESOLVER__MAX_DEPTH");
    remove_env("IOC_RESOLVER__TRACE_RESOLUTION");

    let config = result.unwrap();
    assert_eq!(config.resolver.max_depth, 5);
    assert!(config.resolver.trace_resolution);
}
