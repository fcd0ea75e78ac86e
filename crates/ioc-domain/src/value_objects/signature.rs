//! Executable signatures
//!
//! An ordered list of parameter types identifying one constructor or
//! method overload. Matching is exact and order-sensitive.

use std::fmt;

use super::type_key::TypeKey;

/// Ordered parameter types of a constructor or method
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    parameters: Vec<TypeKey>,
}

impl Signature {
    /// Create a signature from parameter types
    pub fn new(parameters: Vec<TypeKey>) -> Self {
        Self { parameters }
    }

    /// Signature without parameters
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parameter types in declaration order
    pub fn parameters(&self) -> &[TypeKey] {
        &self.parameters
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the signature takes no parameters
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl From<Vec<TypeKey>> for Signature {
    fn from(parameters: Vec<TypeKey>) -> Self {
        Self::new(parameters)
    }
}

impl<const N: usize> From<[TypeKey; N]> for Signature {
    fn from(parameters: [TypeKey; N]) -> Self {
        Self::new(parameters.to_vec())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        f.write_str(")")
    }
}

/// Build a [`Signature`] from a comma-separated list of types
///
/// Accepts the same type syntax as [`type_key!`](crate::type_key).
///
/// ```
/// use ioc_domain::{signature, TypeKey};
///
/// trait Store: Send + Sync {}
/// struct Config;
///
/// let sig = signature![dyn Store, Config, u16];
/// assert_eq!(sig.len(), 3);
/// assert_eq!(sig.parameters()[0], TypeKey::interface::<dyn Store>());
/// assert!(signature![].is_empty());
/// ```
#[macro_export]
macro_rules! signature {
    (@acc [$($keys:expr),*]) => {
        $crate::Signature::new(vec![$($keys),*])
    };
    (@acc [$($keys:expr),*] dyn $t:path $(, $($rest:tt)*)?) => {
        $crate::signature!(@acc [$($keys,)* $crate::TypeKey::interface::<dyn $t>()] $($($rest)*)?)
    };
    (@acc [$($keys:expr),*] [$t:ty; $n:expr] $(, $($rest:tt)*)?) => {
        $crate::signature!(@acc [$($keys,)* $crate::TypeKey::array::<$t, { $n }>()] $($($rest)*)?)
    };
    (@acc [$($keys:expr),*] $t:ty $(, $($rest:tt)*)?) => {
        $crate::signature!(@acc [$($keys,)* $crate::TypeKey::of::<$t>()] $($($rest)*)?)
    };
    ($($input:tt)*) => {
        $crate::signature!(@acc [] $($input)*)
    };
}
