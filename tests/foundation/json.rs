//! Integration tests for JSON interop
//!
//! Tests parsing into values, key order, and conversion back to JSON.

use deepval_foundation::{ErrorKind, Kind, Limits, Value, array, object};
use serde_json::json;

#[test]
fn parsed_objects_are_plain_and_ordered() {
    let v = Value::from_json(json!({ "z": 1, "a": [true, null], "m": "s" }));
    assert_eq!(v.kind(), Kind::PlainObject);
    let keys: Vec<String> = v.own_keys().iter().map(ToString::to_string).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(v.get_key("a").kind(), Kind::Array);
    assert!(v.get_key("a").get_key("1").is_null());
}

#[test]
fn proto_key_is_an_own_property() {
    let text = r#"{"__proto__":{"polluted":true}}"#;
    let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
    let v = Value::from(parsed);
    assert_eq!(v.own_keys().len(), 1);
    let polluted = v.get_key("__proto__").get_key("polluted");
    assert_eq!(polluted, Value::from(true));
}

#[test]
fn round_trip_tree() {
    let source = json!({ "a": 1, "b": { "c": [1, 2.5, "x"] }, "d": null });
    let v = Value::from_json(source.clone());
    assert_eq!(v.to_json().unwrap(), source);
}

#[test]
fn special_values_to_json() {
    let v = object! {
        "date" => Value::date_millis(1_000),
        "re" => Value::regexp("a+", "g").unwrap(),
        "map" => Value::map([("k", 1)]),
        "set" => Value::set([1, 2]),
        "gone" => Value::Undefined,
        "holes" => array![Value::Undefined, f64::NAN],
        "inst" => Value::instance("Point", [("x", 1)]),
    };
    assert_eq!(
        v.to_json().unwrap(),
        json!({
            "date": 1000,
            "re": "/a+/g",
            "map": [["k", 1]],
            "set": [1, 2],
            "holes": [null, null],
            "inst": { "x": 1 },
        })
    );
}

#[test]
fn cyclic_value_fails_with_recursion_error() {
    let v = object! {};
    v.set_key("self", v.clone());
    let err = v.to_json().unwrap_err();
    assert!(err.is_out_of_range());
    assert!(matches!(err.kind, ErrorKind::RecursionTooDeep { .. }));
    assert!(err.to_string().ends_with("maximum 50"));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("to_json"));
    assert!(ctx.path.iter().all(|k| k == "self"));
    v.set_key("self", Value::Null);
}

#[test]
fn custom_recursion_ceiling() {
    let v = object! { "a" => object! { "b" => object! {} } };
    let roomy = Limits::default().with_max_recursion_depth(2);
    let tight = Limits::default().with_max_recursion_depth(1);
    assert!(v.to_json_with(&roomy).is_ok());
    assert!(v.to_json_with(&tight).is_err());
}
