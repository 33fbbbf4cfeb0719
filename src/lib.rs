//! Deepval - deep operations over dynamic value trees
//!
//! This crate re-exports both layers of deepval for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: deepval_ops - Deep clone, merge, equality, path get/set
//! Layer 0: deepval_foundation - Value, Kind, Path, guards, limits, errors
//! ```

pub use deepval_foundation as foundation;
pub use deepval_ops as ops;

pub use deepval_foundation::{Error, ErrorKind, Kind, Limits, Path, Result, Value, array, object};
pub use deepval_ops::{
    clone_deep, get, is_equal, merge_deep, merge_deep_with, set, set_immutable, shallow_clone,
};
