//! Shared container storage.
//!
//! Every container value is reached through a [`Handle`]: cloning a handle
//! copies the reference, not the contents, so two values can point at the
//! same container and observe each other's mutations. Identity is the
//! address of the shared allocation.
//!
//! Array elements live in an `im::Vector`, which makes a shallow copy of an
//! array O(1) and lets the copy share its element spine with the original.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::date::DateData;
use crate::regexp::RegExpData;
use crate::value::Value;

/// Reference-counted, lockable handle to a container.
pub struct Handle<T>(Arc<RwLock<T>>);

impl<T> Handle<T> {
    /// Wraps `inner` in a fresh allocation with its own identity.
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self(Arc::new(RwLock::new(inner)))
    }

    /// Locks the container for reading.
    ///
    /// Do not hold the guard across a call that may lock the same container
    /// for writing.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Locks the container for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Returns true if both handles refer to the same container.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the identity of the container (its allocation address).
    #[must_use]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:#x})", self.id())
    }
}

/// Handle to an array.
pub type ArrayRef = Handle<ArrayData>;
/// Handle to an object (plain or class instance).
pub type ObjectRef = Handle<ObjectData>;
/// Handle to a keyed map.
pub type MapRef = Handle<MapData>;
/// Handle to a set.
pub type SetRef = Handle<SetData>;
/// Handle to a date.
pub type DateRef = Handle<DateData>;
/// Handle to a regular expression.
pub type RegExpRef = Handle<RegExpData>;

// =============================================================================
// Arrays
// =============================================================================

/// Dense, ordered array elements.
///
/// Holes are stored as [`Value::Undefined`].
#[derive(Clone, Default)]
pub struct ArrayData(im::Vector<Value>);

impl ArrayData {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Appends an element.
    pub fn push(&mut self, value: Value) {
        self.0.push_back(value);
    }

    /// Writes `value` at `index`, filling any gap with `Undefined`.
    pub fn set(&mut self, index: usize, value: Value) {
        while self.0.len() < index {
            self.0.push_back(Value::Undefined);
        }
        if index == self.0.len() {
            self.0.push_back(value);
        } else {
            self.0.set(index, value);
        }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl FromIterator<Value> for ArrayData {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl IntoIterator for ArrayData {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArrayData {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Objects
// =============================================================================

/// Own enumerable properties of an object, in insertion order.
pub type Props = IndexMap<Arc<str>, Value>;

/// Object storage.
///
/// An object without a class name is a plain object. A class name marks an
/// instance of some user type; only its own properties are modelled.
#[derive(Clone, Default)]
pub struct ObjectData {
    class: Option<Arc<str>>,
    props: Props,
}

impl ObjectData {
    /// Creates a plain object with the given properties.
    #[must_use]
    pub fn plain(props: Props) -> Self {
        Self { class: None, props }
    }

    /// Creates an instance of `class` with the given properties.
    #[must_use]
    pub fn instance(class: impl Into<Arc<str>>, props: Props) -> Self {
        Self {
            class: Some(class.into()),
            props,
        }
    }

    /// Returns the class name, if this is not a plain object.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Returns true if this is a plain object.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.class.is_none()
    }

    /// Returns the own properties.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Returns the own properties for mutation.
    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    /// Gets an own property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Sets an own property, keeping its position if it already exists.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: Value) {
        self.props.insert(key.into(), value);
    }

    /// Returns the number of own properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if the object has no own properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

// =============================================================================
// Maps and sets
// =============================================================================

/// Insertion-ordered map entries.
///
/// Keys use [`Value`]'s equality, so containers are keyed by identity.
pub type MapData = IndexMap<Value, Value>;

/// Insertion-ordered set members, compared like map keys.
pub type SetData = IndexSet<Value>;
