//! Binding Registry
//!
//! Concurrent storage for everything the resolver consults:
//!
//! ```text
//! types               TypeKey            → TypeBinding + singleton slot
//! factories           TypeKey            → FactoryBinding + singleton slot
//! contextual_types    (owner, needed)    → TypeKey
//! contextual_values   (owner, needed)    → Instance
//! components          TypeKey            → ComponentDescriptor
//! ```
//!
//! Every operation touches a single entry and is atomic with respect to
//! other threads. There are no cross-map transactions. Values are cloned out
//! of the maps so no shard guard is ever held while user code runs.
//!
//! A singleton slot is created together with its binding. Rebinding a key
//! installs a fresh slot, so a resolution still holding the previous entry
//! can only fill the previous slot, which nothing reads any more.

use std::sync::Arc;

use dashmap::DashMap;
use ioc_domain::{ComponentDescriptor, FactoryBinding, Instance, TypeBinding, TypeKey};
use once_cell::sync::OnceCell;

/// Lazily initialized singleton slot
pub type SingletonCell = Arc<OnceCell<Instance>>;

/// A binding together with the singleton slot it fills
#[derive(Clone)]
pub struct BindingEntry<B> {
    /// What the key is bound to
    pub binding: B,
    /// Instance cached for this binding when its lifetime is singleton
    pub cell: SingletonCell,
}

impl<B> BindingEntry<B> {
    fn new(binding: B) -> Self {
        Self {
            binding,
            cell: Arc::new(OnceCell::new()),
        }
    }

    fn is_cached(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Number of entries in each registry map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Direct type bindings
    pub type_bindings: usize,
    /// Factory bindings
    pub factory_bindings: usize,
    /// Contextual type bindings
    pub contextual_types: usize,
    /// Contextual value bindings
    pub contextual_values: usize,
    /// Registered components
    pub components: usize,
    /// Initialized singleton instances
    pub cached_singletons: usize,
}

/// Concurrent binding store owned by one container
#[derive(Default)]
pub struct Registry {
    types: DashMap<TypeKey, BindingEntry<TypeBinding>>,
    factories: DashMap<TypeKey, BindingEntry<FactoryBinding>>,
    contextual_types: DashMap<(TypeKey, TypeKey), TypeKey>,
    contextual_values: DashMap<(TypeKey, TypeKey), Instance>,
    components: DashMap<TypeKey, Arc<ComponentDescriptor>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a direct binding; returns `true` if one was replaced
    ///
    /// The replaced binding's cached singleton goes with it.
    pub fn put_type_binding(&self, abstract_key: TypeKey, binding: TypeBinding) -> bool {
        self.types
            .insert(abstract_key, BindingEntry::new(binding))
            .is_some()
    }

    /// Store a factory binding; returns `true` if one was replaced
    ///
    /// The replaced binding's cached singleton goes with it.
    pub fn put_factory_binding(&self, abstract_key: TypeKey, binding: FactoryBinding) -> bool {
        self.factories
            .insert(abstract_key, BindingEntry::new(binding))
            .is_some()
    }

    /// Store a contextual type binding; returns `true` if one was replaced
    pub fn put_contextual_type(&self, owner: TypeKey, needed: TypeKey, concrete: TypeKey) -> bool {
        self.contextual_types
            .insert((owner, needed), concrete)
            .is_some()
    }

    /// Store a contextual value binding; returns `true` if one was replaced
    pub fn put_contextual_value(&self, owner: TypeKey, needed: TypeKey, value: Instance) -> bool {
        self.contextual_values
            .insert((owner, needed), value)
            .is_some()
    }

    /// Store a component descriptor; returns `true` if one was replaced
    pub fn put_component(&self, component: ComponentDescriptor) -> bool {
        self.components
            .insert(component.type_key(), Arc::new(component))
            .is_some()
    }

    /// Direct binding for `key`
    pub fn type_binding(&self, key: &TypeKey) -> Option<TypeBinding> {
        self.types.get(key).map(|entry| entry.binding.clone())
    }

    /// Factory binding for `key`
    pub fn factory_binding(&self, key: &TypeKey) -> Option<FactoryBinding> {
        self.factories.get(key).map(|entry| entry.binding.clone())
    }

    /// Direct binding for `key` with its singleton slot, read in one step
    pub fn type_entry(&self, key: &TypeKey) -> Option<BindingEntry<TypeBinding>> {
        self.types.get(key).map(|entry| entry.value().clone())
    }

    /// Factory binding for `key` with its singleton slot, read in one step
    pub fn factory_entry(&self, key: &TypeKey) -> Option<BindingEntry<FactoryBinding>> {
        self.factories.get(key).map(|entry| entry.value().clone())
    }

    /// Contextual type bound for `needed` inside `owner`
    pub fn contextual_type(&self, owner: &TypeKey, needed: &TypeKey) -> Option<TypeKey> {
        self.contextual_types
            .get(&(*owner, *needed))
            .map(|entry| *entry.value())
    }

    /// Contextual value bound for `needed` inside `owner`
    pub fn contextual_value(&self, owner: &TypeKey, needed: &TypeKey) -> Option<Instance> {
        self.contextual_values
            .get(&(*owner, *needed))
            .map(|entry| entry.value().clone())
    }

    /// Descriptor registered for `key`
    pub fn component(&self, key: &TypeKey) -> Option<Arc<ComponentDescriptor>> {
        self.components.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether `key` has a direct binding
    pub fn has_type_binding(&self, key: &TypeKey) -> bool {
        self.types.contains_key(key)
    }

    /// Whether `key` has a factory binding
    pub fn has_factory_binding(&self, key: &TypeKey) -> bool {
        self.factories.contains_key(key)
    }

    /// Whether `(owner, needed)` has a contextual type binding
    pub fn has_contextual_type(&self, owner: &TypeKey, needed: &TypeKey) -> bool {
        self.contextual_types.contains_key(&(*owner, *needed))
    }

    /// Whether `(owner, needed)` has a contextual value binding
    pub fn has_contextual_value(&self, owner: &TypeKey, needed: &TypeKey) -> bool {
        self.contextual_values.contains_key(&(*owner, *needed))
    }

    /// Whether `key` has a component descriptor
    pub fn has_component(&self, key: &TypeKey) -> bool {
        self.components.contains_key(key)
    }

    /// Entry counts, for diagnostics
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            type_bindings: self.types.len(),
            factory_bindings: self.factories.len(),
            contextual_types: self.contextual_types.len(),
            contextual_values: self.contextual_values.len(),
            components: self.components.len(),
            cached_singletons: self.types.iter().filter(|entry| entry.is_cached()).count()
                + self
                    .factories
                    .iter()
                    .filter(|entry| entry.is_cached())
                    .count(),
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("stats", &self.stats())
            .finish()
    }
}
