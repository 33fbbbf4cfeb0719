//! Integration tests for deep merge

use deepval::{Limits, Value, array, get, is_equal, merge_deep, merge_deep_with, object};

#[test]
fn later_sources_win() {
    let merged = merge_deep(
        &object! { "a" => 1 },
        &[object! { "a" => 2 }, object! { "a" => 3 }],
    );
    assert_eq!(merged.get_key("a"), Value::from(3));
}

#[test]
fn non_plain_values_replace() {
    let list = array![1];
    let merged = merge_deep(
        &object! { "a" => object! { "x" => 1 }, "b" => array![9, 9] },
        &[object! { "a" => list.clone(), "b" => array![1] }],
    );
    assert!(merged.get_key("a").same_ref(&list));
    assert!(is_equal(&merged.get_key("b"), &array![1]));
}

#[test]
fn non_object_sources_are_skipped() {
    let sources = [
        Value::Null,
        array![1],
        Value::from("s"),
        object! { "b" => 2 },
    ];
    let merged = merge_deep(&object! { "a" => 1 }, &sources);
    assert!(is_equal(&merged, &object! { "a" => 1, "b" => 2 }));
}

#[test]
fn dangerous_keys_are_dropped() {
    let source = object! {
        "constructor" => object! { "prototype" => object! { "polluted" => true } },
        "ok" => 1,
    };
    let merged = merge_deep(&object! {}, &[source]);
    assert!(is_equal(&merged, &object! { "ok" => 1 }));
}

#[test]
fn depth_ceiling_keeps_target_subtree() {
    let limits = Limits::default().with_max_merge_depth(1);
    let target = object! { "a" => object! { "b" => object! { "c" => 1 } } };
    let source = object! { "a" => object! { "b" => object! { "d" => 2 } } };
    let merged = merge_deep_with(&limits, &target, &[source]);

    let kept = target.get_key("a").get_key("b");
    assert!(merged.get_key("a").get_key("b").same_ref(&kept));
    assert!(get(&merged, "a.b.d", Value::Undefined).is_undefined());
}
