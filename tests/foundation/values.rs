//! Integration tests for Value types
//!
//! Tests construction, classification, identity, property access, and
//! display.

use deepval_foundation::{Kind, Value, array, object};
use std::collections::HashSet;

// =============================================================================
// Construction and Classification
// =============================================================================

#[test]
fn primitives_classify_as_primitive() {
    for v in [
        Value::Undefined,
        Value::Null,
        Value::from(true),
        Value::from(1.5),
        Value::from("s"),
    ] {
        assert_eq!(v.kind(), Kind::Primitive);
        assert!(v.is_primitive());
        assert!(v.ptr_id().is_none());
    }
}

#[test]
fn containers_classify_by_kind() {
    assert_eq!(object! {}.kind(), Kind::PlainObject);
    let user = Value::instance("User", [("id", 1)]);
    assert_eq!(user.kind(), Kind::OtherObject);
    assert_eq!(array![1].kind(), Kind::Array);
    assert_eq!(Value::map([("k", 1)]).kind(), Kind::Map);
    assert_eq!(Value::set([1]).kind(), Kind::Set);
    assert_eq!(Value::date_millis(0).kind(), Kind::Date);
    assert_eq!(Value::regexp("x", "g").unwrap().kind(), Kind::RegExp);
}

#[test]
fn nullish_checks() {
    assert!(Value::Undefined.is_nullish());
    assert!(Value::Null.is_nullish());
    assert!(!Value::from(0).is_nullish());
    assert!(!Value::from("").is_nullish());
}

#[test]
fn default_is_undefined() {
    assert!(Value::default().is_undefined());
}

#[test]
fn kind_display() {
    assert_eq!(Kind::PlainObject.to_string(), "plain object");
    assert_eq!(Kind::Map.to_string(), "map");
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn cloning_a_value_shares_the_container() {
    let a = object! { "x" => 1 };
    let b = a.clone();
    assert!(a.same_ref(&b));
    b.set_key("y", Value::from(2));
    assert_eq!(a.get_key("y"), Value::from(2));
}

#[test]
fn structurally_equal_containers_are_distinct() {
    let a = object! { "x" => 1 };
    let b = object! { "x" => 1 };
    assert!(!a.same_ref(&b));
    assert_ne!(a.ptr_id(), b.ptr_id());
}

#[test]
fn values_hash_by_same_value_zero() {
    let shared = array![1];
    let mut set = HashSet::new();
    set.insert(Value::from(f64::NAN));
    set.insert(Value::from(f64::NAN));
    set.insert(Value::from(0.0));
    set.insert(Value::from(-0.0));
    set.insert(shared.clone());
    set.insert(shared);
    set.insert(array![1]);
    assert_eq!(set.len(), 4);
}

// =============================================================================
// Property Access
// =============================================================================

#[test]
fn object_keys_keep_insertion_order() {
    let obj = object! { "b" => 1, "a" => 2 };
    obj.set_key("c", Value::from(3));
    let keys: Vec<String> = obj.own_keys().iter().map(ToString::to_string).collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn array_grows_with_holes() {
    let arr = array![];
    assert!(arr.set_key("2", Value::from("c")));
    assert_eq!(arr.get_key("length"), Value::from(3));
    assert!(arr.get_key("0").is_undefined());
}

#[test]
fn map_and_set_have_no_own_properties() {
    let map = Value::map([("a", 1)]);
    assert!(map.get_key("a").is_undefined());
    assert!(!map.set_key("a", Value::from(2)));
    assert!(map.own_keys().is_empty());
}

#[test]
fn regexp_tracks_flags() {
    let re = Value::regexp("^ab+$", "gi").unwrap();
    let data = re.as_regexp().unwrap().read();
    assert_eq!(data.source(), "^ab+$");
    assert_eq!(data.flags(), "gi");
    assert!(data.is_match("ABBB"));
    assert_eq!(data.last_index(), 0);
}

#[test]
fn regexp_rejects_bad_flags() {
    assert!(Value::regexp("a", "q").is_err());
    assert!(Value::regexp("a", "gg").is_err());
    assert!(Value::regexp("(", "").is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_nested_tree() {
    let v = object! { "a" => array![1, object! { "b" => Value::Null }] };
    assert_eq!(v.to_string(), "{ a: [1, { b: null }] }");
}

#[test]
fn display_marks_cycles() {
    let arr = array![1];
    arr.set_key("1", arr.clone());
    assert_eq!(arr.to_string(), "[1, [Circular]]");
    arr.set_key("1", Value::Null);
}
