//! Shallow and deep copying.
//!
//! Deep clone tracks every container it has entered in a visited set that
//! lives for one top-level call. A container met a second time, whether
//! through a cycle or through a second reference to an already-copied
//! subtree, resolves to the original container rather than a copy. Cyclic
//! inputs therefore produce a clone that still points back into the source.

use log::debug;
use rustc_hash::FxHashSet;

use deepval_foundation::{
    ArrayData, ArrayRef, DateRef, Handle, Kind, MapData, MapRef, ObjectData, ObjectRef, Props,
    RegExpRef, SetData, SetRef, Value,
};

/// Copies the top level of a container.
///
/// Arrays and objects get a new container whose children are the same
/// references as the original's; an object keeps its class. Every other
/// value is returned as-is.
#[must_use]
pub fn shallow_clone(value: &Value) -> Value {
    let copy = match value.kind() {
        Kind::Array => value.as_array().map(copy_array),
        Kind::PlainObject | Kind::OtherObject => value.as_object().map(copy_object),
        Kind::Primitive | Kind::Date | Kind::RegExp | Kind::Map | Kind::Set => None,
    };
    copy.unwrap_or_else(|| value.clone())
}

fn copy_array(a: &ArrayRef) -> Value {
    Value::Array(Handle::new(a.read().clone()))
}

fn copy_object(o: &ObjectRef) -> Value {
    Value::Object(Handle::new(o.read().clone()))
}

/// Recursively copies `value`.
///
/// Dates keep their instant, regular expressions keep source and flags but
/// not their search position, and map keys are cloned along with their
/// values. Objects keep only their own properties: a class instance comes
/// back as a plain object.
#[must_use]
pub fn clone_deep(value: &Value) -> Value {
    let mut seen = FxHashSet::default();
    clone_value(value, &mut seen)
}

fn clone_value(value: &Value, seen: &mut FxHashSet<usize>) -> Value {
    let Some(id) = value.ptr_id() else {
        return value.clone();
    };
    if !seen.insert(id) {
        debug!("clone_deep: revisiting container {id:#x}, keeping original");
        return value.clone();
    }

    let copy = match value.kind() {
        Kind::Primitive => None,
        Kind::Date => value.as_date().map(copy_date),
        Kind::RegExp => value.as_regexp().map(fresh_regexp),
        Kind::Map => value.as_map().map(|m| clone_map(m, seen)),
        Kind::Set => value.as_set().map(|s| clone_set(s, seen)),
        Kind::Array => value.as_array().map(|a| clone_array(a, seen)),
        Kind::PlainObject | Kind::OtherObject => value.as_object().map(|o| clone_object(o, seen)),
    };
    copy.unwrap_or_else(|| value.clone())
}

fn copy_date(d: &DateRef) -> Value {
    Value::date_millis(d.read().millis())
}

fn fresh_regexp(r: &RegExpRef) -> Value {
    Value::RegExp(Handle::new(r.read().fresh()))
}

// Children are snapshotted before recursing so no lock is held across the
// descent; a cycle would otherwise re-enter the same lock.
fn clone_map(m: &MapRef, seen: &mut FxHashSet<usize>) -> Value {
    let entries: Vec<(Value, Value)> = m
        .read()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let data: MapData = entries
        .iter()
        .map(|(k, v)| (clone_value(k, seen), clone_value(v, seen)))
        .collect();
    Value::Map(Handle::new(data))
}

fn clone_set(s: &SetRef, seen: &mut FxHashSet<usize>) -> Value {
    let members: Vec<Value> = s.read().iter().cloned().collect();
    let data: SetData = members.iter().map(|m| clone_value(m, seen)).collect();
    Value::Set(Handle::new(data))
}

fn clone_array(a: &ArrayRef, seen: &mut FxHashSet<usize>) -> Value {
    let items: Vec<Value> = a.read().iter().cloned().collect();
    let data: ArrayData = items.iter().map(|item| clone_value(item, seen)).collect();
    Value::Array(Handle::new(data))
}

fn clone_object(o: &ObjectRef, seen: &mut FxHashSet<usize>) -> Value {
    let props = o.read().props().clone();
    let copied: Props = props
        .iter()
        .map(|(k, v)| (k.clone(), clone_value(v, seen)))
        .collect();
    Value::Object(Handle::new(ObjectData::plain(copied)))
}
