//! Resolved instances
//!
//! An [`Instance`] is a type-erased, reference-counted value produced by the
//! resolver. It remembers the [`TypeKey`] of its runtime type and may carry
//! an interface view: the same value already upcast to `Arc<dyn Trait>`,
//! attached when the instance was resolved for an abstract type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::type_key::TypeKey;

type AnyArc = Arc<dyn Any + Send + Sync>;

#[derive(Clone)]
struct InterfaceView {
    interface: TypeKey,
    // Holds an `Arc<I>`, which is sized even when `I` is a trait object
    value: AnyArc,
}

/// A resolved, type-erased value
#[derive(Clone)]
pub struct Instance {
    type_key: TypeKey,
    value: AnyArc,
    view: Option<InterfaceView>,
}

impl Instance {
    /// Wrap an owned value
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value
    pub fn from_arc<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            type_key: TypeKey::of::<T>(),
            value,
            view: None,
        }
    }

    /// Wrap a value together with its interface view
    ///
    /// Useful in factories that build a concrete value for an abstract key.
    pub fn implementing<T, I>(value: T, cast: impl FnOnce(Arc<T>) -> Arc<I>) -> Self
    where
        T: Send + Sync + 'static,
        I: ?Sized + Send + Sync + 'static,
    {
        let shared = Arc::new(value);
        let view = cast(Arc::clone(&shared));
        Self::from_arc(shared).with_view(TypeKey::interface::<I>(), Arc::new(view))
    }

    /// Runtime type of the wrapped value
    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    /// Whether the runtime type is `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Shared handle to the value if its runtime type is `T`
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Borrow the value if its runtime type is `T`
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Copy of the value if its runtime type is `T`
    pub fn value<T: Clone + 'static>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// The value viewed through interface `I`, if such a view is attached
    pub fn interface<I: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<I>> {
        self.view
            .as_ref()?
            .value
            .downcast_ref::<Arc<I>>()
            .map(Arc::clone)
    }

    /// Whether a view for `interface` is attached
    pub fn has_view(&self, interface: &TypeKey) -> bool {
        self.view
            .as_ref()
            .is_some_and(|view| view.interface == *interface)
    }

    /// Key of the attached interface view, if any
    pub fn view_key(&self) -> Option<TypeKey> {
        self.view.as_ref().map(|view| view.interface)
    }

    /// Whether both instances share the same allocation
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// Attach an interface view; `view` must hold an `Arc<I>` for `interface`
    pub(crate) fn with_view(mut self, interface: TypeKey, view: AnyArc) -> Self {
        self.view = Some(InterfaceView {
            interface,
            value: view,
        });
        self
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.type_key.name())
            .field("view", &self.view_key().map(|key| key.name()))
            .finish()
    }
}
