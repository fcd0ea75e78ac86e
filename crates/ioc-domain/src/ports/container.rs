//! Container port
//!
//! The public capability surface of a container: registration of
//! components and bindings, contextual overrides, and (through [`Resolve`])
//! resolution and method invocation.
//!
//! Registration methods return `true` when the registration was stored.
//! Re-registering a key overwrites the previous entry silently.

use crate::component::ComponentDescriptor;
use crate::value_objects::{Factory, Instance, Signature, TypeKey};

use super::resolve::Resolve;

/// Registration and resolution operations of a container
pub trait Container: Resolve + Send + Sync {
    /// Whether `key` has a type or factory binding
    fn bounded(&self, key: &TypeKey) -> bool;

    /// Describe a concrete type so it can be constructed
    fn register(&self, component: ComponentDescriptor) -> bool;

    /// Bind `abstract_key` to `concrete`, using its first constructor
    fn bind(&self, abstract_key: TypeKey, concrete: TypeKey) -> bool;

    /// Bind `abstract_key` to the `concrete` constructor matching `signature`
    fn bind_signature(&self, abstract_key: TypeKey, concrete: TypeKey, signature: Signature)
        -> bool;

    /// Bind `abstract_key` to a factory
    fn bind_factory(&self, abstract_key: TypeKey, factory: Factory) -> bool;

    /// Bind `abstract_key` to `concrete`, resolving it at most once
    fn singleton(&self, abstract_key: TypeKey, concrete: TypeKey) -> bool;

    /// Bind `abstract_key` to a factory invoked at most once
    fn singleton_factory(&self, abstract_key: TypeKey, factory: Factory) -> bool;

    /// Give `owner` the `concrete` type wherever it needs `needed`
    fn add_contextual_binding(&self, owner: TypeKey, needed: TypeKey, concrete: TypeKey) -> bool;

    /// Give `owner` a literal value wherever it needs `needed`
    fn add_contextual_value(&self, owner: TypeKey, needed: TypeKey, value: Instance) -> bool;
}
