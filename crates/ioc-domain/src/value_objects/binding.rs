//! Binding records stored by the registry

use std::fmt;
use std::sync::Arc;

use super::instance::Instance;
use super::signature::Signature;
use super::type_key::TypeKey;
use crate::error::Result;
use crate::ports::Resolve;

/// Construction function bound to an abstract type
///
/// Receives the live resolver so it can resolve its own dependencies.
pub type Factory = Arc<dyn Fn(&dyn Resolve) -> Result<Instance> + Send + Sync>;

/// How often a binding is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifetime {
    /// Fresh instance on every resolution
    #[default]
    Transient,
    /// Resolved once per container, then cached
    Singleton,
}

/// Abstract type redirected to a concrete type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBinding {
    /// Type constructed in place of the abstract one
    pub concrete: TypeKey,
    /// Constructor to use; `None` selects the first registered constructor
    pub signature: Option<Signature>,
    /// Caching policy
    pub lifetime: Lifetime,
}

impl TypeBinding {
    /// Transient binding using the first registered constructor
    pub fn new(concrete: TypeKey) -> Self {
        Self {
            concrete,
            signature: None,
            lifetime: Lifetime::Transient,
        }
    }

    /// Select an explicit constructor
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Set the caching policy
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }
}

/// Abstract type produced by a factory
#[derive(Clone)]
pub struct FactoryBinding {
    /// Construction function
    pub factory: Factory,
    /// Caching policy
    pub lifetime: Lifetime,
}

impl FactoryBinding {
    /// Transient factory binding
    pub fn new(factory: Factory) -> Self {
        Self {
            factory,
            lifetime: Lifetime::Transient,
        }
    }

    /// Set the caching policy
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }
}

impl fmt::Debug for FactoryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryBinding")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
