//! # Infrastructure Layer
//!
//! Implementation of the container ports defined in `ioc-domain`, plus the
//! cross-cutting concerns around it.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Registry, resolver sessions, contextual builder, `IocContainer` |
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`constants`] | Infrastructure constants |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, ResolverConfig};
pub use di::{ContainerExt, ContextualBinding, IocContainer, Registry, RegistryStats, Resolver};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
