//! Integration tests for deep equality

use deepval::{Value, array, is_equal, object};

#[test]
fn nested_trees() {
    let a = object! { "a" => array![1, object! { "b" => "x" }] };
    let b = object! { "a" => array![1, object! { "b" => "x" }] };
    let c = object! { "a" => array![1, object! { "b" => "y" }] };
    assert!(is_equal(&a, &b));
    assert!(!is_equal(&a, &c));
}

#[test]
fn number_edge_cases() {
    assert!(is_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    assert!(is_equal(&Value::from(0.0), &Value::from(-0.0)));
    assert!(!is_equal(&Value::from(1), &Value::from("1")));
    assert!(!is_equal(&Value::Null, &Value::Undefined));
}

#[test]
fn dates_and_regexps() {
    assert!(is_equal(&Value::date_millis(5), &Value::date_millis(5)));
    assert!(!is_equal(&Value::date_millis(5), &Value::date_millis(6)));
    assert!(is_equal(
        &Value::regexp("a", "gi").unwrap(),
        &Value::regexp("a", "ig").unwrap()
    ));
    assert!(!is_equal(
        &Value::regexp("a", "g").unwrap(),
        &Value::regexp("a", "").unwrap()
    ));
}

#[test]
fn mismatched_kinds() {
    assert!(!is_equal(&array![], &object! {}));
    assert!(!is_equal(&Value::date_millis(0), &object! {}));
    assert!(!is_equal(&Value::map([("a", 1)]), &object! { "a" => 1 }));
}

#[test]
fn key_order_does_not_matter() {
    assert!(is_equal(
        &object! { "a" => 1, "b" => 2 },
        &object! { "b" => 2, "a" => 1 }
    ));
}

#[test]
fn same_reference_is_equal() {
    let v = object! {};
    v.set_key("self", v.clone());
    assert!(is_equal(&v, &v));
    v.set_key("self", Value::Null);
}
