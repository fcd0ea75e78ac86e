//! Container
//!
//! [`IocContainer`] owns a [`Registry`] and a [`ResolverConfig`]. Every
//! resolution starts a fresh [`Resolver`] session, so one container can be
//! shared across threads (`Arc<IocContainer>`) and several independent
//! containers can live side by side.

use ioc_domain::{
    ComponentDescriptor, Container, Factory, FactoryBinding, Instance, Lifetime, Resolve, Result,
    Signature, TypeBinding, TypeKey,
};
use tracing::{debug, info};

use super::registry::{Registry, RegistryStats};
use super::resolver::Resolver;
use crate::config::{AppConfig, ResolverConfig};

/// Dependency-resolution container
#[derive(Debug, Default)]
pub struct IocContainer {
    registry: Registry,
    config: ResolverConfig,
}

impl IocContainer {
    /// Container with default resolver settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Container with explicit resolver settings
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Container configured from a loaded [`AppConfig`]
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            max_depth = config.resolver.max_depth,
            detect_cycles = config.resolver.detect_cycles,
            "Creating container"
        );
        Self::with_config(config.resolver.clone())
    }

    /// Resolver settings
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registry entry counts
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    fn session(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, &self.config)
    }

    fn put_type(&self, abstract_key: TypeKey, binding: TypeBinding) -> bool {
        let concrete = binding.concrete;
        let lifetime = binding.lifetime;
        let replaced = self.registry.put_type_binding(abstract_key, binding);
        debug!(
            abstract_type = %abstract_key,
            %concrete,
            ?lifetime,
            replaced,
            "Registered type binding"
        );
        true
    }

    fn put_factory(&self, abstract_key: TypeKey, binding: FactoryBinding) -> bool {
        let lifetime = binding.lifetime;
        let replaced = self.registry.put_factory_binding(abstract_key, binding);
        debug!(
            abstract_type = %abstract_key,
            ?lifetime,
            replaced,
            "Registered factory binding"
        );
        true
    }
}

impl Resolve for IocContainer {
    fn resolve(&self, key: &TypeKey) -> Result<Instance> {
        self.session().resolve(key)
    }

    fn resolve_with(&self, key: &TypeKey, signature: &Signature) -> Result<Instance> {
        self.session().resolve_with(key, signature)
    }

    fn call(&self, instance: &Instance, method: &str, signature: &Signature) -> Result<Instance> {
        self.session().call(instance, method, signature)
    }
}

impl Container for IocContainer {
    fn bounded(&self, key: &TypeKey) -> bool {
        self.registry.has_type_binding(key) || self.registry.has_factory_binding(key)
    }

    fn register(&self, component: ComponentDescriptor) -> bool {
        let key = component.type_key();
        let constructors = component.constructors().len();
        let replaced = self.registry.put_component(component);
        debug!(component = %key, constructors, replaced, "Registered component");
        true
    }

    fn bind(&self, abstract_key: TypeKey, concrete: TypeKey) -> bool {
        self.put_type(abstract_key, TypeBinding::new(concrete))
    }

    fn bind_signature(
        &self,
        abstract_key: TypeKey,
        concrete: TypeKey,
        signature: Signature,
    ) -> bool {
        self.put_type(
            abstract_key,
            TypeBinding::new(concrete).with_signature(signature),
        )
    }

    fn bind_factory(&self, abstract_key: TypeKey, factory: Factory) -> bool {
        self.put_factory(abstract_key, FactoryBinding::new(factory))
    }

    fn singleton(&self, abstract_key: TypeKey, concrete: TypeKey) -> bool {
        self.put_type(
            abstract_key,
            TypeBinding::new(concrete).with_lifetime(Lifetime::Singleton),
        )
    }

    fn singleton_factory(&self, abstract_key: TypeKey, factory: Factory) -> bool {
        self.put_factory(
            abstract_key,
            FactoryBinding::new(factory).with_lifetime(Lifetime::Singleton),
        )
    }

    fn add_contextual_binding(&self, owner: TypeKey, needed: TypeKey, concrete: TypeKey) -> bool {
        let replaced = self.registry.put_contextual_type(owner, needed, concrete);
        debug!(%owner, %needed, %concrete, replaced, "Registered contextual type binding");
        true
    }

    fn add_contextual_value(&self, owner: TypeKey, needed: TypeKey, value: Instance) -> bool {
        let replaced = self.registry.put_contextual_value(owner, needed, value);
        debug!(%owner, %needed, replaced, "Registered contextual value binding");
        true
    }
}
