//! Core value model for deepval.
//!
//! This crate provides:
//! - [`Value`] - A dynamically typed value with identity-bearing containers
//! - [`Kind`] - Container classification shared by every algorithm
//! - [`Path`] - Key paths and the dangerous-key check
//! - [`guard`] - Hard depth ceilings that fail with a typed error
//! - [`Limits`] - Configurable depth ceilings
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod date;
pub mod error;
pub mod guard;
#[cfg(feature = "json")]
pub mod json;
pub mod kind;
pub mod limits;
pub mod path;
pub mod regexp;
pub mod value;

pub use collections::{
    ArrayData, ArrayRef, DateRef, Handle, MapData, MapRef, ObjectData, ObjectRef, Props,
    RegExpRef, SetData, SetRef,
};
pub use date::DateData;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use guard::{check_recursion_depth, validate_path_depth};
pub use kind::Kind;
pub use limits::Limits;
pub use path::{DANGEROUS_KEYS, Path, has_dangerous_key, is_dangerous_key, parse_path};
pub use regexp::RegExpData;
pub use value::{Value, array_index};

/// Builds a plain object from `key => value` pairs.
///
/// ```
/// use deepval_foundation::{object, Value};
///
/// let v = object! { "a" => 1, "b" => object! { "c" => "x" } };
/// assert_eq!(v.get_key("a"), Value::from(1));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::object()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Value::object_from([$(($key, $crate::Value::from($value))),+])
    };
}

/// Builds an array from values.
///
/// ```
/// use deepval_foundation::{array, Value};
///
/// let v = array![1, "two", array![3]];
/// assert_eq!(v.get_key("length"), Value::from(3));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::array(::std::vec::Vec::<$crate::Value>::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Value::array([$($crate::Value::from($value)),+])
    };
}
