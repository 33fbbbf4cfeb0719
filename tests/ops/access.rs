//! Integration tests for path get/set

use deepval::ops::{try_get, try_set_immutable};
use deepval::{ErrorKind, Limits, Value, array, get, is_equal, object, set, set_immutable};

#[test]
fn get_with_key_list() {
    let obj = object! { "a.b" => object! { "c" => 1 } };
    assert_eq!(get(&obj, ["a.b", "c"], Value::Undefined), Value::from(1));
    assert!(get(&obj, "a.b.c", Value::Undefined).is_undefined());
}

#[test]
fn get_reads_into_strings() {
    let obj = object! { "tags" => array!["alpha", "be"] };
    assert_eq!(get(&obj, "tags.0.length", Value::Undefined), Value::from(5));
    assert_eq!(get(&obj, "tags.1.0", Value::Undefined), Value::from("b"));
}

#[test]
fn set_mutates_and_returns_root() {
    let obj = object! {};
    let result = set(&obj, "a.0", Value::from(1));
    assert!(result.same_ref(&obj));
    assert!(is_equal(&obj, &object! { "a" => object! { "0" => 1 } }));
}

#[test]
fn set_into_existing_array() {
    let obj = object! { "a" => array![] };
    set(&obj, "a.0", Value::from(1));
    assert!(is_equal(&obj, &object! { "a" => array![1] }));
}

#[test]
fn set_keeps_map_intermediate() {
    let cache = Value::map([("k", 1)]);
    let obj = object! { "cache" => cache.clone() };
    set(&obj, "cache.k", Value::from(2));
    assert!(obj.get_key("cache").same_ref(&cache));
    assert_eq!(cache.as_map().unwrap().read().len(), 1);
}

#[test]
fn set_immutable_leaves_input_untouched() {
    let obj = object! { "a" => object! { "b" => 1 } };
    let result = set_immutable(&obj, "a.c", Value::from(2));
    assert!(is_equal(&obj, &object! { "a" => object! { "b" => 1 } }));
    let expected = object! { "a" => object! { "b" => 1, "c" => 2 } };
    assert!(is_equal(&result, &expected));
}

#[test]
fn set_immutable_rejects_prototype_paths() {
    let obj = object! {};
    let result = set_immutable(&obj, "__proto__.x", Value::from(1));
    assert!(result.same_ref(&obj));
    assert!(object! {}.get_key("x").is_undefined());
}

#[test]
fn checked_access_reports_long_paths() {
    let limits = Limits::strict();
    let path = vec!["k"; 33];
    let obj = object! {};
    let err = try_get(&limits, &obj, &path, Value::Undefined).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::PathTooDeep { depth: 33, .. }));
    let at_limit = try_set_immutable(&limits, &obj, &path[..32], Value::Null);
    assert!(at_limit.is_ok());
}
