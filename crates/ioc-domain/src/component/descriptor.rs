//! Component descriptors
//!
//! Rust has no runtime reflection, so every concrete type the container
//! builds is described explicitly: its constructors (in registration
//! order), the methods that may be invoked with injected arguments, and the
//! interfaces it can be viewed as.
//!
//! ```
//! use std::sync::Arc;
//! use ioc_domain::{signature, Component, ComponentDescriptor};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! #[derive(Default)]
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! let descriptor: ComponentDescriptor = Component::<English>::new()
//!     .default_constructor()
//!     .method("greet", signature![], |this, _args| Ok(this.greet()))
//!     .implements::<dyn Greeter>(|english| english as Arc<dyn Greeter>)
//!     .into();
//!
//! assert_eq!(descriptor.constructors().len(), 1);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::arguments::Arguments;
use crate::error::BoxError;
use crate::value_objects::{Instance, Signature, TypeKey};

/// Erased constructor body
pub type ConstructorFn =
    Arc<dyn Fn(&Arguments) -> std::result::Result<Instance, BoxError> + Send + Sync>;

/// Erased method body; receives the receiver instance and resolved arguments
pub type MethodFn =
    Arc<dyn Fn(&Instance, &Arguments) -> std::result::Result<Instance, BoxError> + Send + Sync>;

/// Erased upcast attaching an interface view to an instance
pub type CastFn = Arc<dyn Fn(&Instance) -> Option<Instance> + Send + Sync>;

/// One constructor overload
#[derive(Clone)]
pub struct Constructor {
    signature: Signature,
    build: ConstructorFn,
}

impl Constructor {
    /// Parameter types
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Run the constructor body
    pub fn invoke(&self, arguments: &Arguments) -> std::result::Result<Instance, BoxError> {
        (self.build)(arguments)
    }
}

/// One method overload
#[derive(Clone)]
pub struct Method {
    name: String,
    signature: Signature,
    invoke: MethodFn,
}

impl Method {
    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter types
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Run the method body on `receiver`
    pub fn invoke(
        &self,
        receiver: &Instance,
        arguments: &Arguments,
    ) -> std::result::Result<Instance, BoxError> {
        (self.invoke)(receiver, arguments)
    }
}

/// Type-erased description of a concrete type
#[derive(Clone)]
pub struct ComponentDescriptor {
    type_key: TypeKey,
    constructors: Vec<Constructor>,
    methods: Vec<Method>,
    casts: HashMap<TypeKey, CastFn>,
}

impl ComponentDescriptor {
    /// Described type
    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    /// Constructors in registration order
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Registered methods
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Select a constructor
    ///
    /// `None` picks the first registered constructor, `Some` requires an
    /// exact, order-sensitive signature match.
    pub fn constructor(&self, signature: Option<&Signature>) -> Option<&Constructor> {
        match signature {
            None => self.constructors.first(),
            Some(wanted) => self.constructors.iter().find(|c| c.signature == *wanted),
        }
    }

    /// Find a method by exact name and signature
    pub fn method(&self, name: &str, signature: &Signature) -> Option<&Method> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.signature == *signature)
    }

    /// Whether the type declares a view for `interface`
    pub fn implements(&self, interface: &TypeKey) -> bool {
        self.casts.contains_key(interface)
    }

    /// Attach the `interface` view to `instance`
    ///
    /// Returns `None` when the interface is not declared or the instance is
    /// not of the described type.
    pub fn cast(&self, instance: &Instance, interface: &TypeKey) -> Option<Instance> {
        self.casts.get(interface).and_then(|cast| cast(instance))
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("type", &self.type_key.name())
            .field(
                "constructors",
                &self
                    .constructors
                    .iter()
                    .map(|c| c.signature.to_string())
                    .collect::<Vec<_>>(),
            )
            .field(
                "methods",
                &self
                    .methods
                    .iter()
                    .map(|m| format!("{}{}", m.name, m.signature))
                    .collect::<Vec<_>>(),
            )
            .field(
                "implements",
                &self.casts.keys().map(|k| k.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Typed builder for a [`ComponentDescriptor`]
pub struct Component<T> {
    descriptor: ComponentDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> Component<T> {
    /// Start describing `T`
    pub fn new() -> Self {
        Self {
            descriptor: ComponentDescriptor {
                type_key: TypeKey::of::<T>(),
                constructors: Vec::new(),
                methods: Vec::new(),
                casts: HashMap::new(),
            },
            _marker: PhantomData,
        }
    }

    /// Add a constructor overload
    ///
    /// Registering the same signature twice replaces the earlier body but
    /// keeps its position.
    pub fn constructor<F>(mut self, signature: Signature, build: F) -> Self
    where
        F: Fn(&Arguments) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        let constructor = Constructor {
            signature,
            build: Arc::new(move |arguments: &Arguments| build(arguments).map(Instance::new)),
        };
        let constructors = &mut self.descriptor.constructors;
        match constructors
            .iter_mut()
            .find(|c| c.signature == constructor.signature)
        {
            Some(existing) => *existing = constructor,
            None => constructors.push(constructor),
        }
        self
    }

    /// Add the implicit parameterless constructor backed by [`Default`]
    pub fn default_constructor(self) -> Self
    where
        T: Default,
    {
        self.constructor(Signature::empty(), |_| Ok(T::default()))
    }

    /// Add a method that can be called with injected arguments
    pub fn method<R, F>(mut self, name: impl Into<String>, signature: Signature, invoke: F) -> Self
    where
        R: Send + Sync + 'static,
        F: Fn(&T, &Arguments) -> std::result::Result<R, BoxError> + Send + Sync + 'static,
    {
        let name = name.into();
        let receiver_name = std::any::type_name::<T>();
        let method = Method {
            name,
            signature,
            invoke: Arc::new(move |receiver: &Instance, arguments: &Arguments| {
                let this = receiver.downcast_ref::<T>().ok_or_else(|| -> BoxError {
                    format!(
                        "receiver is {}, expected {}",
                        receiver.type_key().name(),
                        receiver_name
                    )
                    .into()
                })?;
                invoke(this, arguments).map(Instance::new)
            }),
        };
        let methods = &mut self.descriptor.methods;
        match methods
            .iter_mut()
            .find(|m| m.name == method.name && m.signature == method.signature)
        {
            Some(existing) => *existing = method,
            None => methods.push(method),
        }
        self
    }

    /// Declare that `T` can be viewed as interface `I`
    pub fn implements<I>(mut self, cast: impl Fn(Arc<T>) -> Arc<I> + Send + Sync + 'static) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let interface = TypeKey::interface::<I>();
        let erased: CastFn = Arc::new(move |instance: &Instance| {
            let concrete = instance.downcast::<T>()?;
            let view: Arc<I> = cast(concrete);
            Some(instance.clone().with_view(interface, Arc::new(view)))
        });
        self.descriptor.casts.insert(interface, erased);
        self
    }

    /// Finish the description
    pub fn build(self) -> ComponentDescriptor {
        self.descriptor
    }
}

impl<T: Send + Sync + 'static> Default for Component<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> From<Component<T>> for ComponentDescriptor {
    fn from(component: Component<T>) -> Self {
        component.build()
    }
}
