//! Small predicates and numeric helpers.

use deepval_foundation::{Kind, Value};

/// Returns true if `value` has nothing in it.
///
/// `undefined`, `null`, booleans and numbers are always empty. Strings and
/// arrays are empty at length zero, maps and sets at size zero. Objects
/// are empty without own properties; dates and regexps have none.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.read().is_empty(),
        Value::Map(m) => m.read().is_empty(),
        Value::Set(s) => s.read().is_empty(),
        Value::Object(o) => o.read().is_empty(),
        Value::Date(_) | Value::RegExp(_) => true,
    }
}

/// Returns true for any container other than an array.
#[must_use]
pub fn is_object(value: &Value) -> bool {
    let kind = value.kind();
    kind.is_container() && kind != Kind::Array
}

/// Returns true for objects without a class.
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    value.kind() == Kind::PlainObject
}

/// Clamps `n` into `[lower, upper]`, swapping the bounds if they are
/// inverted. A NaN `n` stays NaN.
#[must_use]
pub fn clamp(n: f64, lower: f64, upper: f64) -> f64 {
    if n.is_nan() {
        return n;
    }
    let (lo, hi) = if lower > upper {
        (upper, lower)
    } else {
        (lower, upper)
    };
    n.max(lo).min(hi)
}
