//! Component descriptors and resolved arguments

/// Positional argument access
pub mod arguments;
/// Constructor, method and interface descriptions
pub mod descriptor;

pub use arguments::Arguments;
pub use descriptor::{
    CastFn, Component, ComponentDescriptor, Constructor, ConstructorFn, Method, MethodFn,
};
