//! Dependency Resolution System
//!
//! ```text
//! IocContainer
//! ├── Registry             (concurrent binding maps, per-binding singleton cells)
//! ├── ResolverConfig       (depth limit, cycle detection)
//! └── Resolver session     (one per resolve/call, owns the in-progress stack)
//!       ├── type / factory bindings
//!       ├── contextual overrides (owner, needed)
//!       └── component constructors and methods
//! ```
//!
//! ## Key Principles
//!
//! - **Explicit components**: concrete types describe their constructors,
//!   methods and interfaces; nothing is discovered by reflection
//! - **Owned registries**: every container has its own registry, there is no
//!   process-wide state
//! - **Contextual overrides win**: per-owner bindings are consulted before
//!   global ones
//! - **Fail whole**: any failure aborts the entire resolution, no partially
//!   built graph is returned

pub mod container;
pub mod contextual;
pub mod registry;
pub mod resolver;

pub use container::IocContainer;
pub use contextual::{ContainerExt, ContextualBinding};
pub use registry::{BindingEntry, Registry, RegistryStats, SingletonCell};
pub use resolver::Resolver;
