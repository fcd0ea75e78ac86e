//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by constructor, method and factory bodies
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the container
#[derive(Error, Debug)]
pub enum Error {
    /// Resolution reached an abstract type with neither a type nor a factory binding
    #[error("Unbound interface: {type_name}")]
    UnboundAbstractType {
        /// The abstract type that has no binding
        type_name: String,
    },

    /// No constructor with the requested signature exists
    #[error("No matching constructor: {type_name}{signature}")]
    NoMatchingConstructor {
        /// The type being constructed
        type_name: String,
        /// The requested signature, or `(..)` for the first constructor
        signature: String,
    },

    /// No method with the requested name and signature exists
    #[error("No matching method: {type_name}::{method}{signature}")]
    NoMatchingMethod {
        /// The runtime type of the receiver
        type_name: String,
        /// Requested method name
        method: String,
        /// Requested signature
        signature: String,
    },

    /// A primitive or array parameter has no contextual override
    #[error("Cannot resolve {kind} parameter {parameter} of {owner}")]
    UnsupportedParameterKind {
        /// The type declaring the parameter
        owner: String,
        /// The parameter type
        parameter: String,
        /// `primitive` or `array`
        kind: String,
    },

    /// A constructor, method or factory body failed
    #[error("Invocation of {target} failed")]
    InvocationFailure {
        /// Description of the invoked executable
        target: String,
        /// The original failure
        #[source]
        source: BoxError,
    },

    /// The contextual binding builder was misused
    #[error("Precondition violated: {message}")]
    PreconditionViolation {
        /// Description of the violated precondition
        message: String,
    },

    /// A type depends on itself through its dependency chain
    #[error("Cyclic dependency: {path}")]
    CyclicDependency {
        /// Chain of types leading back to the repeated one
        path: String,
    },

    /// The resolution chain is deeper than the configured limit
    #[error("Resolution depth limit {limit} exceeded: {path}")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
        /// Chain of types at the point of failure
        path: String,
    },

    /// A concrete type was resolved but never registered as a component
    #[error("Unregistered component: {type_name}")]
    UnregisteredComponent {
        /// The concrete type
        type_name: String,
    },

    /// A concrete type was resolved for an interface it does not declare
    #[error("{concrete} does not implement {interface}")]
    NotAnImplementation {
        /// The concrete runtime type
        concrete: String,
        /// The requested interface
        interface: String,
    },

    /// A resolved argument could not be read as the requested type
    #[error("Argument {index} mismatch: expected {expected}, {message}")]
    ArgumentMismatch {
        /// Position of the argument
        index: usize,
        /// Requested type
        expected: String,
        /// What was found instead
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unbound interface error
    pub fn unbound<S: Into<String>>(type_name: S) -> Self {
        Self::UnboundAbstractType {
            type_name: type_name.into(),
        }
    }

    /// Create a missing constructor error
    pub fn no_constructor<S: Into<String>, G: Into<String>>(type_name: S, signature: G) -> Self {
        Self::NoMatchingConstructor {
            type_name: type_name.into(),
            signature: signature.into(),
        }
    }

    /// Create a missing method error
    pub fn no_method<S: Into<String>, M: Into<String>, G: Into<String>>(
        type_name: S,
        method: M,
        signature: G,
    ) -> Self {
        Self::NoMatchingMethod {
            type_name: type_name.into(),
            method: method.into(),
            signature: signature.into(),
        }
    }

    /// Create an unsupported parameter error
    pub fn unsupported_parameter<O: Into<String>, P: Into<String>, K: Into<String>>(
        owner: O,
        parameter: P,
        kind: K,
    ) -> Self {
        Self::UnsupportedParameterKind {
            owner: owner.into(),
            parameter: parameter.into(),
            kind: kind.into(),
        }
    }

    /// Create an unregistered component error
    pub fn unregistered<S: Into<String>>(type_name: S) -> Self {
        Self::UnregisteredComponent {
            type_name: type_name.into(),
        }
    }

    /// Create a missing interface cast error
    pub fn not_an_implementation<C: Into<String>, I: Into<String>>(concrete: C, interface: I) -> Self {
        Self::NotAnImplementation {
            concrete: concrete.into(),
            interface: interface.into(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic<S: Into<String>>(path: S) -> Self {
        Self::CyclicDependency { path: path.into() }
    }

    /// Create a depth exceeded error
    pub fn depth_exceeded<S: Into<String>>(limit: usize, path: S) -> Self {
        Self::DepthExceeded {
            limit,
            path: path.into(),
        }
    }
}

// Invocation and builder error creation methods
impl Error {
    /// Wrap a failure raised by an invoked executable
    pub fn invocation<S: Into<String>>(target: S, source: BoxError) -> Self {
        Self::InvocationFailure {
            target: target.into(),
            source,
        }
    }

    /// Create a precondition violation error
    pub fn precondition<S: Into<String>>(message: S) -> Self {
        Self::PreconditionViolation {
            message: message.into(),
        }
    }

    /// Create an argument mismatch error
    pub fn argument_mismatch<E: Into<String>, M: Into<String>>(
        index: usize,
        expected: E,
        message: M,
    ) -> Self {
        Self::ArgumentMismatch {
            index,
            expected: expected.into(),
            message: message.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io_with_source(source.kind().to_string(), source)
    }
}
