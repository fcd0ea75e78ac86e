//! Domain layer constants
//!
//! Infrastructure-specific constants live in `ioc_infrastructure::constants`.

/// Default bound on the number of types being resolved on one call chain
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 64;

/// Separator used when rendering a resolution path
pub const RESOLUTION_PATH_SEPARATOR: &str = " -> ";

/// Signature label used when the first registered constructor is requested
pub const FIRST_CONSTRUCTOR_LABEL: &str = "(..)";
