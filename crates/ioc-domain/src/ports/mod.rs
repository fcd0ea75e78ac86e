//! Domain Port Interfaces
//!
//! Contracts implemented by the infrastructure layer:
//!
//! - **resolve** - resolution and method injection, also handed to factories
//! - **container** - registration surface of a container

/// Container registration port
pub mod container;
/// Resolution port
pub mod resolve;

pub use container::Container;
pub use resolve::{Resolve, ResolveExt};
