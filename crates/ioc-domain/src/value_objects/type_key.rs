//! Type descriptors
//!
//! A [`TypeKey`] is the identity the container uses for every type it
//! knows about: abstract interfaces, concrete components, primitives and
//! fixed-size arrays. Keys compare and hash by [`TypeId`] only, the name is
//! carried for diagnostics.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Classification of a type as seen by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Sized type constructed through a registered component
    Concrete,
    /// Trait object type (`dyn Trait`); never self-constructible
    Abstract,
    /// Scalar type; only injectable through contextual values
    Primitive,
    /// Fixed-size array type; not injectable
    Array,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeKind::Concrete => "concrete",
            TypeKind::Abstract => "abstract",
            TypeKind::Primitive => "primitive",
            TypeKind::Array => "array",
        };
        f.write_str(label)
    }
}

/// Opaque type identity used as a registry key
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
}

impl TypeKey {
    /// Key for a sized type
    ///
    /// Scalars (`bool`, `char`, integers and floats) are classified as
    /// [`TypeKind::Primitive`], everything else as [`TypeKind::Concrete`].
    pub fn of<T: 'static>() -> Self {
        let id = TypeId::of::<T>();
        let kind = if is_scalar(id) {
            TypeKind::Primitive
        } else {
            TypeKind::Concrete
        };
        Self {
            id,
            name: std::any::type_name::<T>(),
            kind,
        }
    }

    /// Key for an abstract interface, usually `dyn Trait`
    pub fn interface<I: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<I>(),
            name: std::any::type_name::<I>(),
            kind: TypeKind::Abstract,
        }
    }

    /// Key for the fixed-size array `[T; N]`
    pub fn array<T: 'static, const N: usize>() -> Self {
        Self {
            id: TypeId::of::<[T; N]>(),
            name: std::any::type_name::<[T; N]>(),
            kind: TypeKind::Array,
        }
    }

    /// Underlying type id
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module paths, e.g. `Vec<A>` instead of
    /// `alloc::vec::Vec<my_crate::A>`
    pub fn short_name(&self) -> String {
        shorten(self.name)
    }

    /// Resolver classification
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether this is an abstract (interface) type
    pub fn is_abstract(&self) -> bool {
        self.kind == TypeKind::Abstract
    }

    /// Whether this is a primitive scalar
    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }

    /// Whether this is a fixed-size array
    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeKey")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

fn is_scalar(id: TypeId) -> bool {
    [
        TypeId::of::<bool>(),
        TypeId::of::<char>(),
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<i128>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<u128>(),
        TypeId::of::<usize>(),
        TypeId::of::<f32>(),
        TypeId::of::<f64>(),
    ]
    .contains(&id)
}

/// Strip module paths from every segment of a type name
fn shorten(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment = String::new();
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(last_path_segment(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(last_path_segment(&segment));
    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Build a [`TypeKey`] from type syntax
///
/// `dyn Trait` produces an abstract key, `[T; N]` an array key and any
/// other type goes through [`TypeKey::of`].
///
/// ```
/// use ioc_domain::{type_key, TypeKind};
///
/// trait Greeter: Send + Sync {}
///
/// assert_eq!(type_key!(dyn Greeter).kind(), TypeKind::Abstract);
/// assert_eq!(type_key!(i32).kind(), TypeKind::Primitive);
/// assert_eq!(type_key!([u8; 4]).kind(), TypeKind::Array);
/// assert_eq!(type_key!(String).kind(), TypeKind::Concrete);
/// ```
#[macro_export]
macro_rules! type_key {
    (dyn $t:path) => {
        $crate::TypeKey::interface::<dyn $t>()
    };
    ([$t:ty; $n:expr]) => {
        $crate::TypeKey::array::<$t, { $n }>()
    };
    ($t:ty) => {
        $crate::TypeKey::of::<$t>()
    };
}
