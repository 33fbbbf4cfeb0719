//! Hard depth ceilings.
//!
//! Unlike the rest of the workspace, which degrades silently, these checks
//! fail with a typed out-of-range error. Nothing calls them implicitly:
//! they are tripwires for callers walking untrusted paths or trees.

use log::trace;

use crate::error::{Error, Result};
use crate::limits::Limits;

/// Fails if `keys` is longer than the default ceiling (100). Exactly 100 passes.
///
/// # Errors
///
/// Returns [`ErrorKind::PathTooDeep`](crate::ErrorKind::PathTooDeep).
pub fn validate_path_depth<S: AsRef<str>>(keys: &[S]) -> Result<()> {
    validate_path_depth_with(&Limits::DEFAULT, keys)
}

/// Fails if `keys` is longer than `limits.max_path_depth`.
///
/// # Errors
///
/// Returns [`ErrorKind::PathTooDeep`](crate::ErrorKind::PathTooDeep).
pub fn validate_path_depth_with<S: AsRef<str>>(limits: &Limits, keys: &[S]) -> Result<()> {
    let (depth, limit) = (keys.len(), limits.max_path_depth);
    if depth > limit {
        return Err(Error::path_too_deep(depth, limit));
    }
    trace!("path depth {depth} within {limit}");
    Ok(())
}

/// Fails if `depth` exceeds the default ceiling (50). Exactly 50 passes.
///
/// # Errors
///
/// Returns [`ErrorKind::RecursionTooDeep`](crate::ErrorKind::RecursionTooDeep).
pub fn check_recursion_depth(depth: usize) -> Result<()> {
    check_recursion_depth_with(&Limits::DEFAULT, depth)
}

/// Fails if `depth` exceeds `limits.max_recursion_depth`.
///
/// # Errors
///
/// Returns [`ErrorKind::RecursionTooDeep`](crate::ErrorKind::RecursionTooDeep).
pub fn check_recursion_depth_with(limits: &Limits, depth: usize) -> Result<()> {
    let limit = limits.max_recursion_depth;
    if depth > limit {
        return Err(Error::recursion_too_deep(depth, limit));
    }
    trace!("recursion depth {depth} within {limit}");
    Ok(())
}
