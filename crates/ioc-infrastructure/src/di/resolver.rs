//! Resolution Engine
//!
//! A [`Resolver`] is one resolution session: it borrows the container's
//! registry and configuration and keeps the stack of types currently being
//! resolved on this call chain. The container creates a fresh session for
//! every top-level `resolve`, `resolve_with` or `call`; factories receive
//! the live session so their nested resolutions share the same stack.
//!
//! ## Algorithm
//!
//! ```text
//! resolve(T)
//!   ├─ type binding T → (C, sig)   → construct(C, sig)       [cached if singleton]
//!   ├─ factory binding T → f       → f(resolver)             [cached if singleton]
//!   ├─ T abstract                  → UnboundAbstractType
//!   └─ otherwise                   → construct(T, first constructor)
//!
//! construct(C, sig)
//!   for each parameter P of the selected constructor, owner C:
//!   ├─ contextual type (C, P) → X  → resolve(X)
//!   ├─ contextual value (C, P)     → literal
//!   ├─ P primitive                 → UnsupportedParameterKind
//!   ├─ P array                     → UnsupportedParameterKind
//!   └─ otherwise                   → resolve(P)
//! ```
//!
//! Whenever the requested key is abstract, the resolved instance carries the
//! interface view for that key, taken from the concrete component.

use std::cell::RefCell;

use ioc_domain::constants::{FIRST_CONSTRUCTOR_LABEL, RESOLUTION_PATH_SEPARATOR};
use ioc_domain::{
    Arguments, Error, Factory, Instance, Lifetime, Resolve, Result, Signature, TypeKey, TypeKind,
};
use tracing::{debug, trace, warn};

use super::registry::{Registry, SingletonCell};
use crate::config::ResolverConfig;

/// One resolution session over a registry
pub struct Resolver<'a> {
    registry: &'a Registry,
    config: &'a ResolverConfig,
    stack: RefCell<Vec<TypeKey>>,
}

/// Pops the session stack when a resolution frame ends, on success or error
struct Frame<'s> {
    stack: &'s RefCell<Vec<TypeKey>>,
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}

impl<'a> Resolver<'a> {
    /// Start a session
    pub fn new(registry: &'a Registry, config: &'a ResolverConfig) -> Self {
        Self {
            registry,
            config,
            stack: RefCell::new(Vec::new()),
        }
    }

    /// Number of types currently being resolved
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// Run `f` with `key` pushed on the session stack
    fn enter<T>(&self, key: &TypeKey, f: impl FnOnce() -> Result<T>) -> Result<T> {
        {
            let stack = self.stack.borrow();
            if self.config.detect_cycles && stack.contains(key) {
                return Err(Error::cyclic(render_path(&stack, key)));
            }
            if stack.len() >= self.config.max_depth {
                if !self.config.detect_cycles {
                    warn!(
                        limit = self.config.max_depth,
                        "Resolution depth limit reached with cycle detection disabled"
                    );
                }
                return Err(Error::depth_exceeded(
                    self.config.max_depth,
                    render_path(&stack, key),
                ));
            }
        }
        self.stack.borrow_mut().push(*key);
        let _frame = Frame { stack: &self.stack };
        f()
    }

    /// Steps 1-4 of `resolve`
    fn resolve_binding(&self, key: &TypeKey) -> Result<Instance> {
        if let Some(entry) = self.registry.type_entry(key) {
            let binding = &entry.binding;
            trace!(abstract_type = %key, concrete = %binding.concrete, "Following type binding");
            let instance = self.cached(key, binding.lifetime, &entry.cell, || {
                self.construct(&binding.concrete, binding.signature.as_ref())
            })?;
            return self.view_for(instance, key);
        }

        if let Some(entry) = self.registry.factory_entry(key) {
            trace!(abstract_type = %key, "Invoking factory binding");
            let instance = self.cached(key, entry.binding.lifetime, &entry.cell, || {
                self.invoke_factory(&entry.binding.factory)
            })?;
            return self.view_for(instance, key);
        }

        if key.is_abstract() {
            return Err(Error::unbound(key.to_string()));
        }

        self.construct(key, None)
    }

    /// Build `key` with the constructor selected by `signature`
    fn construct(&self, key: &TypeKey, signature: Option<&Signature>) -> Result<Instance> {
        let component = self
            .registry
            .component(key)
            .ok_or_else(|| self.not_constructible(key))?;

        let label = signature.map_or_else(|| FIRST_CONSTRUCTOR_LABEL.to_string(), |s| s.to_string());
        let constructor = component
            .constructor(signature)
            .ok_or_else(|| Error::no_constructor(key.to_string(), label))?;

        let arguments = self.resolve_parameters(key, constructor.signature())?;
        let instance = constructor.invoke(&arguments).map_err(|source| {
            Error::invocation(format!("{key}::new{}", constructor.signature()), source)
        })?;

        if self.config.trace_resolution {
            debug!(
                component = %key,
                signature = %constructor.signature(),
                depth = self.depth(),
                "Constructed component"
            );
        }
        Ok(instance)
    }

    /// Resolve every parameter of an executable declared by `owner`
    fn resolve_parameters(&self, owner: &TypeKey, signature: &Signature) -> Result<Arguments> {
        let values = signature
            .parameters()
            .iter()
            .map(|parameter| self.resolve_parameter(owner, parameter))
            .collect::<Result<Vec<_>>>()?;
        Ok(Arguments::new(*owner, values))
    }

    fn resolve_parameter(&self, owner: &TypeKey, parameter: &TypeKey) -> Result<Instance> {
        if let Some(concrete) = self.registry.contextual_type(owner, parameter) {
            trace!(%owner, %parameter, %concrete, "Using contextual type binding");
            let instance = self.resolve(&concrete)?;
            return self.view_for(instance, parameter);
        }

        if let Some(value) = self.registry.contextual_value(owner, parameter) {
            trace!(%owner, %parameter, "Using contextual value binding");
            return self.view_for(value, parameter);
        }

        match parameter.kind() {
            TypeKind::Primitive | TypeKind::Array => Err(Error::unsupported_parameter(
                owner.to_string(),
                parameter.to_string(),
                parameter.kind().to_string(),
            )),
            // Abstract parameters go through their type binding, then their
            // factory binding, and fail as unbound otherwise
            TypeKind::Abstract | TypeKind::Concrete => self.resolve(parameter),
        }
    }

    fn invoke_factory(&self, factory: &Factory) -> Result<Instance> {
        factory(self)
    }

    fn cached(
        &self,
        key: &TypeKey,
        lifetime: Lifetime,
        cell: &SingletonCell,
        init: impl FnOnce() -> Result<Instance>,
    ) -> Result<Instance> {
        match lifetime {
            Lifetime::Transient => init(),
            Lifetime::Singleton => {
                // Re-entering an initializing cell would block this thread forever,
                // so this check holds even with cycle detection disabled
                let stack = self.stack.borrow();
                if stack.iter().filter(|frame| *frame == key).count() > 1 {
                    return Err(Error::cyclic(render_path(&stack[..stack.len() - 1], key)));
                }
                drop(stack);

                // The slot belongs to the binding snapshot read above, so a
                // concurrent rebind never sees this instance
                cell.get_or_try_init(|| {
                    debug!(abstract_type = %key, "Initializing singleton");
                    init()
                })
                .cloned()
            }
        }
    }

    /// Attach the view for `key` when it is abstract
    fn view_for(&self, instance: Instance, key: &TypeKey) -> Result<Instance> {
        if !key.is_abstract() || instance.has_view(key) {
            return Ok(instance);
        }
        let concrete = instance.type_key();
        self.registry
            .component(&concrete)
            .and_then(|component| component.cast(&instance, key))
            .ok_or_else(|| Error::not_an_implementation(concrete.to_string(), key.to_string()))
    }

    fn not_constructible(&self, key: &TypeKey) -> Error {
        match key.kind() {
            TypeKind::Abstract => Error::unbound(key.to_string()),
            TypeKind::Primitive | TypeKind::Array => {
                let owner = self
                    .stack
                    .borrow()
                    .iter()
                    .rev()
                    .find(|frame| *frame != key)
                    .map_or_else(|| "resolve".to_string(), ToString::to_string);
                Error::unsupported_parameter(owner, key.to_string(), key.kind().to_string())
            }
            TypeKind::Concrete => Error::unregistered(key.to_string()),
        }
    }
}

impl Resolve for Resolver<'_> {
    fn resolve(&self, key: &TypeKey) -> Result<Instance> {
        self.enter(key, || self.resolve_binding(key))
    }

    fn resolve_with(&self, key: &TypeKey, signature: &Signature) -> Result<Instance> {
        self.enter(key, || self.construct(key, Some(signature)))
    }

    fn call(&self, instance: &Instance, method: &str, signature: &Signature) -> Result<Instance> {
        let owner = instance.type_key();
        let no_method = || Error::no_method(owner.to_string(), method, signature.to_string());

        let component = self.registry.component(&owner).ok_or_else(no_method)?;
        let target = component.method(method, signature).ok_or_else(no_method)?;

        let arguments = self.resolve_parameters(&owner, target.signature())?;
        target
            .invoke(instance, &arguments)
            .map_err(|source| Error::invocation(format!("{owner}::{method}{signature}"), source))
    }
}

fn render_path(stack: &[TypeKey], next: &TypeKey) -> String {
    stack
        .iter()
        .chain(std::iter::once(next))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(RESOLUTION_PATH_SEPARATOR)
}
