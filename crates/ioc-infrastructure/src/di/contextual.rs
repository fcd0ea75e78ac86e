//! Contextual Binding Builder
//!
//! Fluent registration of per-owner overrides:
//!
//! ```ignore
//! container.when(type_key!(ReportService)).needs(type_key!(dyn Store)).give(type_key!(MemoryStore))?;
//! container.when(type_key!(ReportService)).needs(type_key!(u32)).give_value(25u32)?;
//! ```
//!
//! The override only applies where `needed` appears directly as a
//! constructor or method parameter of the owner.

use std::sync::Arc;

use ioc_domain::{
    Component, ComponentDescriptor, Container, Error, Factory, Instance, Resolve, Result, TypeKey,
};

/// Short-lived builder scoped to one owner type
#[must_use = "a contextual binding is only stored by `give`, `give_value` or `give_instance`"]
pub struct ContextualBinding<'c> {
    container: &'c dyn Container,
    owner: TypeKey,
    needs: Option<TypeKey>,
    repeated_needs: bool,
}

impl<'c> ContextualBinding<'c> {
    /// Start a builder writing into `container`
    pub fn new(container: &'c dyn Container, owner: TypeKey) -> Self {
        Self {
            container,
            owner,
            needs: None,
            repeated_needs: false,
        }
    }

    /// Record the dependency to override; may be called once
    pub fn needs(mut self, dependency: TypeKey) -> Self {
        if self.needs.is_some() {
            self.repeated_needs = true;
        }
        self.needs = Some(dependency);
        self
    }

    /// Resolve `implementation` wherever the owner needs the dependency
    pub fn give(self, implementation: TypeKey) -> Result<bool> {
        let (owner, needed) = self.target()?;
        Ok(self
            .container
            .add_contextual_binding(owner, needed, implementation))
    }

    /// Inject a literal value wherever the owner needs the dependency
    pub fn give_value<V: Send + Sync + 'static>(self, value: V) -> Result<bool> {
        self.give_instance(Instance::new(value))
    }

    /// Inject a prepared instance wherever the owner needs the dependency
    pub fn give_instance(self, value: Instance) -> Result<bool> {
        let (owner, needed) = self.target()?;
        Ok(self.container.add_contextual_value(owner, needed, value))
    }

    fn target(&self) -> Result<(TypeKey, TypeKey)> {
        if self.repeated_needs {
            return Err(Error::precondition(format!(
                "needs() called more than once for contextual binding of {}",
                self.owner
            )));
        }
        let needed = self.needs.ok_or_else(|| {
            Error::precondition(format!(
                "give() called before needs() for contextual binding of {}",
                self.owner
            ))
        })?;
        Ok((self.owner, needed))
    }
}

/// Convenience methods available on every [`Container`]
pub trait ContainerExt: Container + Sized {
    /// Start a contextual binding for `owner`
    fn when(&self, owner: TypeKey) -> ContextualBinding<'_> {
        ContextualBinding::new(self, owner)
    }

    /// Register a component built with [`Component`]
    fn component<T: Send + Sync + 'static>(&self, component: Component<T>) -> bool {
        self.register(ComponentDescriptor::from(component))
    }

    /// Register `T` with only its [`Default`] constructor
    fn register_default<T: Default + Send + Sync + 'static>(&self) -> bool {
        self.register(Component::<T>::new().default_constructor().build())
    }

    /// Bind interface `I` to concrete `C`
    fn bind_type<I: ?Sized + 'static, C: 'static>(&self) -> bool {
        self.bind(TypeKey::interface::<I>(), TypeKey::of::<C>())
    }

    /// Bind interface `I` to concrete `C` as a singleton
    fn singleton_type<I: ?Sized + 'static, C: 'static>(&self) -> bool {
        self.singleton(TypeKey::interface::<I>(), TypeKey::of::<C>())
    }

    /// Bind `key` to a closure
    fn bind_fn<F>(&self, key: TypeKey, factory: F) -> bool
    where
        F: Fn(&dyn Resolve) -> Result<Instance> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(factory);
        self.bind_factory(key, factory)
    }

    /// Bind `key` to a closure invoked at most once
    fn singleton_fn<F>(&self, key: TypeKey, factory: F) -> bool
    where
        F: Fn(&dyn Resolve) -> Result<Instance> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(factory);
        self.singleton_factory(key, factory)
    }
}

impl<C: Container> ContainerExt for C {}
