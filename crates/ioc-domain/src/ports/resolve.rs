//! Resolution port
//!
//! [`Resolve`] is what factories receive: the live resolver of the current
//! resolution, so a factory can resolve its own dependencies through the
//! same cycle-checked call chain.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{Instance, Signature, TypeKey};

/// Resolution and method-injection operations
pub trait Resolve {
    /// Resolve `key` through its bindings, or construct it with its first
    /// registered constructor
    fn resolve(&self, key: &TypeKey) -> Result<Instance>;

    /// Construct `key` with the constructor matching `signature` exactly
    fn resolve_with(&self, key: &TypeKey, signature: &Signature) -> Result<Instance>;

    /// Invoke `method` on `instance`, resolving its parameters
    fn call(&self, instance: &Instance, method: &str, signature: &Signature) -> Result<Instance>;
}

/// Typed helpers on top of [`Resolve`]
pub trait ResolveExt: Resolve {
    /// Resolve a concrete type and downcast it
    fn make<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let key = TypeKey::of::<T>();
        let instance = self.resolve(&key)?;
        instance
            .downcast::<T>()
            .ok_or_else(|| Error::not_an_implementation(instance.type_key().name(), key.name()))
    }

    /// Resolve an interface and return its view
    fn make_interface<I: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<I>> {
        let key = TypeKey::interface::<I>();
        let instance = self.resolve(&key)?;
        instance
            .interface::<I>()
            .ok_or_else(|| Error::not_an_implementation(instance.type_key().name(), key.name()))
    }

    /// Invoke a method and copy its result out
    fn call_value<R: Clone + 'static>(
        &self,
        instance: &Instance,
        method: &str,
        signature: &Signature,
    ) -> Result<R> {
        let result = self.call(instance, method, signature)?;
        result.value::<R>().ok_or_else(|| {
            Error::argument_mismatch(
                0,
                std::any::type_name::<R>(),
                format!("{method} returned {}", result.type_key()),
            )
        })
    }
}

impl<R: Resolve + ?Sized> ResolveExt for R {}
