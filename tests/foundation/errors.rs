//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use deepval_foundation::{Error, ErrorContext, ErrorKind, Value};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_path_too_deep() {
    let err = Error::path_too_deep(120, 100);
    assert!(matches!(err.kind, ErrorKind::PathTooDeep { .. }));
    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "path depth 120 exceeds maximum 100");
}

#[test]
fn error_recursion_too_deep() {
    let err = Error::recursion_too_deep(51, 50);
    assert!(err.is_out_of_range());
    assert!(err.to_string().contains("51"));
}

#[test]
fn error_invalid_pattern() {
    let err = Value::regexp("[", "").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    assert!(!err.is_out_of_range());
    assert!(err.to_string().contains("/[/"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_defaults_to_none() {
    assert!(Error::path_too_deep(2, 1).context.is_none());
}

#[test]
fn context_display() {
    let ctx = ErrorContext::new()
        .with_operation("to_json")
        .with_path(&["a", "b"]);
    assert_eq!(ctx.to_string(), "in to_json at a.b");
    assert_eq!(ErrorContext::new().with_path(&["x"]).to_string(), "at x");
}

#[test]
fn context_attaches_to_error() {
    let err = Error::recursion_too_deep(3, 2)
        .with_context(ErrorContext::new().with_operation("walk"));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("walk"));
    assert!(ctx.path.is_empty());
}
