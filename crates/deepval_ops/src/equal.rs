//! Deep structural equality.

use deepval_foundation::{ArrayRef, DateRef, Kind, MapRef, ObjectRef, RegExpRef, SetRef, Value};

/// Returns true if `a` and `b` are structurally equivalent.
///
/// Checks, in order:
/// 1. SameValueZero: identical containers, equal primitives, `NaN` with
///    `NaN`, `-0` with `+0`.
/// 2. `null`/`undefined` against anything else is unequal.
/// 3. Different `typeof` tags are unequal.
/// 4. Dates compare by instant.
/// 5. Regular expressions compare source and flags, ignoring flag order.
/// 6. Maps need the same size and, for every key of `a`, a value under the
///    same key in `b` that is deeply equal. Keys are looked up by
///    SameValueZero, not deep equality.
/// 7. Sets need the same size and every member of `a` present in `b` by
///    SameValueZero. Two sets holding distinct but deeply equal objects are
///    not equal.
/// 8. Arrays compare length and elements in order.
/// 9. Objects, plain or not, compare their own key sets and the values
///    under each key. Class names are not compared.
///
/// Mismatched kinds are unequal, except that plain objects and class
/// instances compare with each other.
///
/// Cyclic values that are not identical at the point of the cycle recurse
/// without bound.
#[must_use]
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if a.same_value_zero(b) {
        return true;
    }
    if a.is_nullish() || b.is_nullish() {
        return false;
    }
    if a.type_of() != b.type_of() {
        return false;
    }

    let (ka, kb) = (a.kind(), b.kind());
    if ka != kb && !(ka.is_object() && kb.is_object()) {
        return false;
    }
    match ka {
        Kind::Primitive => false,
        Kind::Date => both(a.as_date(), b.as_date(), dates_equal),
        Kind::RegExp => both(a.as_regexp(), b.as_regexp(), regexps_equal),
        Kind::Map => both(a.as_map(), b.as_map(), maps_equal),
        Kind::Set => both(a.as_set(), b.as_set(), sets_equal),
        Kind::Array => both(a.as_array(), b.as_array(), arrays_equal),
        Kind::PlainObject | Kind::OtherObject => {
            both(a.as_object(), b.as_object(), objects_equal)
        }
    }
}

fn both<T>(x: Option<&T>, y: Option<&T>, eq: impl FnOnce(&T, &T) -> bool) -> bool {
    x.zip(y).is_some_and(|(x, y)| eq(x, y))
}

fn dates_equal(x: &DateRef, y: &DateRef) -> bool {
    x.read().millis() == y.read().millis()
}

fn regexps_equal(x: &RegExpRef, y: &RegExpRef) -> bool {
    let (x, y) = (x.read(), y.read());
    x.source() == y.source() && x.flags() == y.flags()
}

fn maps_equal(x: &MapRef, y: &MapRef) -> bool {
    let entries: Vec<(Value, Value)> = x
        .read()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if entries.len() != y.read().len() {
        return false;
    }
    entries.iter().all(|(k, v)| {
        let other = y.read().get(k).cloned();
        other.is_some_and(|w| is_equal(v, &w))
    })
}

fn sets_equal(x: &SetRef, y: &SetRef) -> bool {
    let (x, y) = (x.read(), y.read());
    x.len() == y.len() && x.iter().all(|m| y.contains(m))
}

fn arrays_equal(x: &ArrayRef, y: &ArrayRef) -> bool {
    let xs: Vec<Value> = x.read().iter().cloned().collect();
    let ys: Vec<Value> = y.read().iter().cloned().collect();
    xs.len() == ys.len() && xs.iter().zip(&ys).all(|(p, q)| is_equal(p, q))
}

fn objects_equal(x: &ObjectRef, y: &ObjectRef) -> bool {
    let xs = x.read().props().clone();
    let ys = y.read().props().clone();
    xs.len() == ys.len()
        && xs
            .iter()
            .all(|(k, v)| ys.get(k).is_some_and(|w| is_equal(v, w)))
}
