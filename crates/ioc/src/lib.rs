//! # ioc
//!
//! A dependency-resolution container. Concrete types are described as
//! components, abstract types (`dyn Trait`) are bound to concrete types or
//! factories, and the container builds whole object graphs on demand.
//!
//! ## Features
//!
//! - **Type and factory bindings**: map an interface to an implementation
//!   or to a closure
//! - **Constructor selection**: first registered constructor by default, or
//!   an exact signature
//! - **Contextual overrides**: give one owner a different implementation or
//!   a literal value for a dependency
//! - **Method injection**: call registered methods with resolved arguments
//! - **Singletons**: resolve a binding at most once per container
//! - **Cycle detection**: dependency cycles fail with the offending path
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ioc::prelude::*;
//!
//! trait Store: Send + Sync {
//!     fn name(&self) -> &'static str;
//! }
//!
//! #[derive(Default)]
//! struct MemoryStore;
//!
//! impl Store for MemoryStore {
//!     fn name(&self) -> &'static str {
//!         "memory"
//!     }
//! }
//!
//! let container = IocContainer::new();
//! container.component(
//!     Component::<MemoryStore>::new()
//!         .default_constructor()
//!         .implements::<dyn Store>(|store| store as Arc<dyn Store>),
//! );
//! container.bind_type::<dyn Store, MemoryStore>();
//!
//! let store = container.make_interface::<dyn Store>().unwrap();
//! assert_eq!(store.name(), "memory");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - type descriptors, bindings, components, errors and ports
//! - `infrastructure` - registry, resolver, container, configuration and logging

/// Domain layer - type descriptors, components, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ioc_domain::*;
}

/// Infrastructure layer - container, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ioc_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;
pub use ioc_domain::{signature, type_key};

// Re-export the container and its configuration at the crate root
pub use infrastructure::{
    AppConfig, ConfigBuilder, ConfigLoader, ContainerExt, ContextualBinding, IocContainer,
    LoggingConfig, ResolverConfig, init_logging,
};

/// Everything needed to register and resolve components
pub mod prelude {
    pub use ioc_domain::{
        Arguments, BoxError, Component, Container, Error, Instance, Lifetime, Resolve, ResolveExt,
        Result, Signature, TypeKey, signature, type_key,
    };
    pub use ioc_infrastructure::{ContainerExt, IocContainer};
}
