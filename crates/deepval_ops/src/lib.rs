//! Deep operations over deepval values.
//!
//! This crate provides:
//! - [`clone_deep`] / [`shallow_clone`] - Copying with cycle and shared-reference handling
//! - [`merge_deep`] - Recursive merge of plain objects into a fresh result
//! - [`is_equal`] - Structural equality by container kind
//! - [`get`] / [`set`] / [`set_immutable`] - Key-path access, in place or with structural sharing
//! - [`split_words`], [`is_empty`], [`clamp`] - Small helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod clone;
pub mod equal;
pub mod merge;
pub mod predicates;
pub mod words;


pub use access::{get, set, set_immutable, try_get, try_set, try_set_immutable};
pub use clone::{clone_deep, shallow_clone};
pub use equal::is_equal;
pub use merge::{merge_deep, merge_deep_with};
pub use predicates::{clamp, is_empty, is_object, is_plain_object};
pub use words::split_words;
