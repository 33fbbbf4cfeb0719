//! Integration tests for paths, guards, and limits
//!
//! Tests path parsing, the dangerous-key check, and the depth ceilings.

use deepval_foundation::guard::{check_recursion_depth_with, validate_path_depth_with};
use deepval_foundation::{
    DANGEROUS_KEYS, ErrorKind, Limits, Path, check_recursion_depth, has_dangerous_key,
    is_dangerous_key, parse_path, validate_path_depth,
};

// =============================================================================
// Path Parsing
// =============================================================================

#[test]
fn dotted_path_splits_literally() {
    assert_eq!(parse_path("a.b.c").keys(), ["a", "b", "c"]);
    assert_eq!(parse_path("a..b").keys(), ["a", "", "b"]);
    assert_eq!(parse_path("").keys(), [""]);
    assert_eq!(parse_path("a.").keys(), ["a", ""]);
}

#[test]
fn key_arrays_pass_through() {
    let keys = ["a.b", "c"];
    let path = Path::from(keys);
    assert_eq!(path.len(), 2);
    assert_eq!(path.keys(), ["a.b", "c"]);
}

#[test]
fn owned_key_lists() {
    let keys = vec!["x".to_string(), "y".to_string()];
    let path = Path::from(keys.as_slice());
    assert_eq!(path.keys(), ["x", "y"]);
}

#[test]
fn empty_key_list() {
    let keys: Vec<&str> = Vec::new();
    assert!(Path::from(keys).is_empty());
}

// =============================================================================
// Dangerous Keys
// =============================================================================

#[test]
fn dangerous_keys_are_exact_matches() {
    for key in DANGEROUS_KEYS {
        assert!(is_dangerous_key(key));
    }
    assert!(!is_dangerous_key("__proto"));
    assert!(!is_dangerous_key("Constructor"));
    assert!(!is_dangerous_key("proto"));
}

#[test]
fn dangerous_key_anywhere_in_path() {
    assert!(parse_path("a.__proto__.b").has_dangerous_key());
    assert!(parse_path("prototype").has_dangerous_key());
    assert!(!parse_path("a.b").has_dangerous_key());
    assert!(has_dangerous_key(&["x", "constructor"]));
    assert!(!has_dangerous_key::<&str>(&[]));
}

// =============================================================================
// Guards and Limits
// =============================================================================

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("k{i}")).collect()
}

#[test]
fn path_depth_boundary_is_inclusive() {
    assert!(validate_path_depth(&keys(100)).is_ok());
    let err = validate_path_depth(&keys(101)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::PathTooDeep { .. }));
    assert_eq!(err.to_string(), "path depth 101 exceeds maximum 100");
}

#[test]
fn recursion_depth_boundary_is_inclusive() {
    assert!(check_recursion_depth(50).is_ok());
    let err = check_recursion_depth(51).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RecursionTooDeep { .. }));
    assert_eq!(err.to_string(), "recursion depth 51 exceeds maximum 50");
}

#[test]
fn custom_limits() {
    let limits = Limits::default()
        .with_max_path_depth(2)
        .with_max_recursion_depth(1);
    assert!(validate_path_depth_with(&limits, &["a", "b"]).is_ok());
    assert!(validate_path_depth_with(&limits, &["a", "b", "c"]).is_err());
    assert!(check_recursion_depth_with(&limits, 1).is_ok());
    assert!(check_recursion_depth_with(&limits, 2).is_err());
}

#[test]
fn limit_presets() {
    assert_eq!(Limits::default(), Limits::DEFAULT);
    assert_eq!(Limits::DEFAULT.max_merge_depth, 50);
    let (strict, relaxed, default) = (Limits::strict(), Limits::relaxed(), Limits::DEFAULT);
    assert!(strict.max_path_depth < default.max_path_depth);
    assert!(relaxed.max_recursion_depth > default.max_recursion_depth);
}
