//! Configuration
//!
//! Layered configuration for the container: defaults, an optional
//! `ioc.toml` file, then `IOC_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AppConfig, LoggingConfig, ResolverConfig};
