//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Identity of an abstract, concrete, primitive or array type |
//! | [`Signature`] | Ordered parameter types of one constructor or method |
//! | [`Instance`] | Type-erased resolved value with optional interface view |
//! | [`TypeBinding`] / [`FactoryBinding`] | Registry records for abstract types |

/// Binding records and lifetimes
pub mod binding;
/// Resolved values
pub mod instance;
/// Executable signatures
pub mod signature;
/// Type descriptors
pub mod type_key;

pub use binding::{Factory, FactoryBinding, Lifetime, TypeBinding};
pub use instance::Instance;
pub use signature::Signature;
pub use type_key::{TypeKey, TypeKind};
