//! # Domain Layer
//!
//! Core types of the dependency-resolution container: type descriptors,
//! signatures, resolved instances, binding records, component descriptors,
//! the error taxonomy and the ports implemented by the infrastructure layer.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `TypeKey`, `Signature`, `Instance`, bindings |
//! | [`component`] | Constructor, method and interface descriptors |
//! | [`ports`] | `Resolve` and `Container` traits |
//! | [`error`] | Error taxonomy |
//! | [`constants`] | Domain constants |

pub mod component;
pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use component::{Arguments, Component, ComponentDescriptor};
pub use error::{BoxError, Error, Result};
pub use ports::{Container, Resolve, ResolveExt};
pub use value_objects::{
    Factory, FactoryBinding, Instance, Lifetime, Signature, TypeBinding, TypeKey, TypeKind,
};
