//! Resolved arguments handed to constructors and methods

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{Instance, TypeKey};

/// Positional arguments resolved for one executable
#[derive(Debug, Clone)]
pub struct Arguments {
    owner: TypeKey,
    values: Vec<Instance>,
}

impl Arguments {
    /// Create arguments resolved on behalf of `owner`
    pub fn new(owner: TypeKey, values: Vec<Instance>) -> Self {
        Self { owner, values }
    }

    /// Type whose constructor or method receives these arguments
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw instance at `index`
    pub fn instance(&self, index: usize) -> Result<&Instance> {
        self.values.get(index).ok_or_else(|| {
            Error::argument_mismatch(
                index,
                "an argument",
                format!("only {} argument(s) were resolved", self.values.len()),
            )
        })
    }

    /// Shared handle to the concrete value at `index`
    pub fn get<T: Send + Sync + 'static>(&self, index: usize) -> Result<Arc<T>> {
        let instance = self.instance(index)?;
        instance
            .downcast::<T>()
            .ok_or_else(|| mismatch::<T>(index, instance))
    }

    /// Copy of the value at `index`; intended for primitives and small values
    pub fn value<T: Clone + 'static>(&self, index: usize) -> Result<T> {
        let instance = self.instance(index)?;
        instance
            .value::<T>()
            .ok_or_else(|| mismatch::<T>(index, instance))
    }

    /// The value at `index` viewed through interface `I`
    pub fn interface<I: ?Sized + Send + Sync + 'static>(&self, index: usize) -> Result<Arc<I>> {
        let instance = self.instance(index)?;
        instance.interface::<I>().ok_or_else(|| {
            Error::argument_mismatch(
                index,
                std::any::type_name::<I>(),
                format!("found {} without that interface view", instance.type_key()),
            )
        })
    }

    /// Consume into the underlying instances
    pub fn into_instances(self) -> Vec<Instance> {
        self.values
    }
}

fn mismatch<T: 'static>(index: usize, found: &Instance) -> Error {
    Error::argument_mismatch(
        index,
        std::any::type_name::<T>(),
        format!("found {}", found.type_key()),
    )
}
