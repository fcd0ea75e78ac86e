//! Unit tests for the error taxonomy

use std::error::Error as _;

use ioc_domain::Error;

#[test]
fn test_resolution_error_messages() {
    assert_eq!(
        Error::unbound("dyn Store").to_string(),
        "Unbound interface: dyn Store"
    );
    assert_eq!(
        Error::no_constructor("Report", "(u8)").to_string(),
        "No matching constructor: Report(u8)"
    );
    assert_eq!(
        Error::no_method("Report", "render", "(bool)").to_string(),
        "No matching method: Report::render(bool)"
    );
    assert_eq!(
        Error::unsupported_parameter("Report", "u32", "primitive").to_string(),
        "Cannot resolve primitive parameter u32 of Report"
    );
    assert_eq!(
        Error::cyclic("A -> B -> A").to_string(),
        "Cyclic dependency: A -> B -> A"
    );
}

#[test]
fn test_invocation_failure_keeps_source() {
    let err = Error::invocation("Report::new()", "template missing".into());

    match &err {
        Error::InvocationFailure { target, .. } => assert_eq!(target, "Report::new()"),
        _ => panic!("Expected InvocationFailure"),
    }
    assert_eq!(err.to_string(), "Invocation of Report::new() failed");
    assert_eq!(err.source().unwrap().to_string(), "template missing");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
    let err: Error = io.into();

    assert_eq!(err.to_string(), "I/O error: permission denied");
    match &err {
        Error::Io { message, source } => {
            assert_eq!(message, "permission denied");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_configuration_error_without_source() {
    match Error::configuration("max_depth cannot be 0") {
        Error::Configuration { message, source } => {
            assert_eq!(message, "max_depth cannot be 0");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}
