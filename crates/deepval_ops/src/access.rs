//! Reading and writing values by key path.
//!
//! [`get`] and [`set`] walk the containers along a path in place.
//! [`set_immutable`] rebuilds only the containers on the path (the spine)
//! and shares every other subtree with the input.
//!
//! Path length is not checked by default. The `try_*` variants run
//! [`validate_path_depth_with`] first and fail on paths that are too long.

use log::{debug, warn};

use deepval_foundation::guard::validate_path_depth_with;
use deepval_foundation::{Kind, Limits, Path, Result, Value};

use crate::clone::shallow_clone;

/// Reads the value at `path`.
///
/// Returns `default` as soon as an intermediate value is `null` or
/// `undefined`, or when the value found is `undefined`. A `null` at the end
/// of the path is returned as-is. Strings resolve `length` and index keys
/// like arrays do.
#[must_use]
pub fn get<'p>(root: &Value, path: impl Into<Path<'p>>, default: Value) -> Value {
    let path = path.into();
    let mut current = root.clone();
    for key in path.keys() {
        if current.is_nullish() {
            return default;
        }
        current = current.get_key(key);
    }
    if current.is_undefined() {
        default
    } else {
        current
    }
}

/// Writes `value` at `path` in place and returns `root`.
///
/// Missing intermediates and primitive intermediates (`null` included) are
/// replaced with fresh empty objects before descending. Containers on the
/// path are never replaced. A path containing a dangerous key leaves `root`
/// untouched.
///
/// The walk stops at the first container that cannot hold the next key:
/// a map, set, date or regexp, an array asked for a non-index key, or a
/// primitive root. Objects created before that point remain.
pub fn set<'p>(root: &Value, path: impl Into<Path<'p>>, value: Value) -> Value {
    let path = path.into();
    if path.has_dangerous_key() {
        warn!("set: rejecting path with dangerous key {:?}", path.keys());
        return root.clone();
    }
    let Some((last, spine)) = path.keys().split_last() else {
        return root.clone();
    };

    let mut current = root.clone();
    for key in spine {
        if !current.accepts_key(key) {
            debug!("set: cannot write {key:?} into {}", current.kind());
            return root.clone();
        }
        let next = current.get_key(key);
        current = match next.kind() {
            Kind::Primitive => {
                let fresh = Value::object();
                current.set_key(key, fresh.clone());
                fresh
            }
            Kind::Date
            | Kind::RegExp
            | Kind::Map
            | Kind::Set
            | Kind::Array
            | Kind::PlainObject
            | Kind::OtherObject => next,
        };
    }
    if !current.set_key(last, value) {
        debug!("set: cannot write {last:?} into {}", current.kind());
    }
    root.clone()
}

/// Returns a new root with `value` at `path`, leaving `root` unmodified.
///
/// Each container on the path is shallow-copied; every sibling off the
/// path keeps its original reference. Missing or non-container
/// intermediates become fresh empty objects. An array on the path stays an
/// array when the next key is an index; for any other key its elements are
/// carried into a new object keyed by index.
///
/// A path containing a dangerous key returns `root` itself.
#[must_use]
pub fn set_immutable<'p>(root: &Value, path: impl Into<Path<'p>>, value: Value) -> Value {
    let path = path.into();
    if path.has_dangerous_key() {
        warn!(
            "set_immutable: rejecting path with dangerous key {:?}",
            path.keys()
        );
        return root.clone();
    }
    rebuild(root, path.keys(), value)
}

/// Copies one spine container and descends.
///
/// A copied class instance keeps its class and a copied array stays an
/// array, so a reader that checks `kind()` on the new root sees the same
/// shape it saw on the old one; only the value at the end of the path
/// differs. Maps, sets, dates and regexps have no own properties to carry
/// over and are replaced by a plain object.
fn rebuild(current: &Value, keys: &[&str], value: Value) -> Value {
    let Some((key, rest)) = keys.split_first() else {
        return value;
    };

    let copy = match current.kind() {
        Kind::PlainObject | Kind::OtherObject => shallow_clone(current),
        Kind::Array if current.accepts_key(key) => shallow_clone(current),
        Kind::Array => Value::from_props(current.own_entries()),
        Kind::Primitive | Kind::Date | Kind::RegExp | Kind::Map | Kind::Set => Value::object(),
    };
    let child = rebuild(&copy.get_key(key), rest, value);
    copy.set_key(key, child);
    copy
}

/// [`get`] after checking the path against `limits`.
///
/// # Errors
///
/// Returns [`ErrorKind::PathTooDeep`](deepval_foundation::ErrorKind::PathTooDeep)
/// if the path is longer than `limits.max_path_depth`.
pub fn try_get<'p>(
    limits: &Limits,
    root: &Value,
    path: impl Into<Path<'p>>,
    default: Value,
) -> Result<Value> {
    let path = path.into();
    validate_path_depth_with(limits, path.keys())?;
    Ok(get(root, path, default))
}

/// [`set`] after checking the path against `limits`.
///
/// # Errors
///
/// Returns [`ErrorKind::PathTooDeep`](deepval_foundation::ErrorKind::PathTooDeep)
/// if the path is longer than `limits.max_path_depth`. `root` is not
/// touched in that case.
pub fn try_set<'p>(
    limits: &Limits,
    root: &Value,
    path: impl Into<Path<'p>>,
    value: Value,
) -> Result<Value> {
    let path = path.into();
    validate_path_depth_with(limits, path.keys())?;
    Ok(set(root, path, value))
}

/// [`set_immutable`] after checking the path against `limits`.
///
/// # Errors
///
/// Returns [`ErrorKind::PathTooDeep`](deepval_foundation::ErrorKind::PathTooDeep)
/// if the path is longer than `limits.max_path_depth`.
pub fn try_set_immutable<'p>(
    limits: &Limits,
    root: &Value,
    path: impl Into<Path<'p>>,
    value: Value,
) -> Result<Value> {
    let path = path.into();
    validate_path_depth_with(limits, path.keys())?;
    Ok(set_immutable(root, path, value))
}
