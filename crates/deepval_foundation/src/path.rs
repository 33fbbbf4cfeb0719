//! Key paths and the dangerous-key check.
//!
//! A path is either a `.`-separated string or an already-split key
//! sequence. Splitting is literal: empty segments survive as empty keys, so
//! `""` is the one-key path `[""]` and `"a..b"` is `["a", "", "b"]`.

use std::borrow::Cow;

/// Keys that reach a shared prototype in the object models this crate
/// mirrors. Any path containing one is rejected by the mutating helpers.
pub const DANGEROUS_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// An ordered list of property keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<'a> {
    keys: Cow<'a, [&'a str]>,
}

impl<'a> Path<'a> {
    /// Splits a dotted path on `.`.
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        Self {
            keys: Cow::Owned(path.split('.').collect()),
        }
    }

    /// Wraps an already-split key sequence without copying it.
    #[must_use]
    pub const fn from_keys(keys: &'a [&'a str]) -> Self {
        Self {
            keys: Cow::Borrowed(keys),
        }
    }

    /// Returns the keys in order.
    #[must_use]
    pub fn keys(&self) -> &[&'a str] {
        &self.keys
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the path has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if any key is dangerous.
    #[must_use]
    pub fn has_dangerous_key(&self) -> bool {
        has_dangerous_key(&self.keys)
    }
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(path: &'a str) -> Self {
        Self::parse(path)
    }
}

impl<'a> From<&'a String> for Path<'a> {
    fn from(path: &'a String) -> Self {
        Self::parse(path)
    }
}

impl<'a> From<&'a [&'a str]> for Path<'a> {
    fn from(keys: &'a [&'a str]) -> Self {
        Self::from_keys(keys)
    }
}

impl<'a> From<&'a Vec<&'a str>> for Path<'a> {
    fn from(keys: &'a Vec<&'a str>) -> Self {
        Self::from_keys(keys)
    }
}

impl<'a> From<Vec<&'a str>> for Path<'a> {
    fn from(keys: Vec<&'a str>) -> Self {
        Self {
            keys: Cow::Owned(keys),
        }
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Path<'a> {
    fn from(keys: [&'a str; N]) -> Self {
        Self {
            keys: Cow::Owned(keys.to_vec()),
        }
    }
}

impl<'a> From<&'a [String]> for Path<'a> {
    fn from(keys: &'a [String]) -> Self {
        Self {
            keys: Cow::Owned(keys.iter().map(String::as_str).collect()),
        }
    }
}

/// Parses a dotted string or key sequence into a [`Path`].
pub fn parse_path<'a>(path: impl Into<Path<'a>>) -> Path<'a> {
    path.into()
}

/// Returns true if `key` is one of [`DANGEROUS_KEYS`]. Case-sensitive.
#[must_use]
pub fn is_dangerous_key(key: &str) -> bool {
    DANGEROUS_KEYS.contains(&key)
}

/// Returns true if any key is dangerous.
///
/// Only reports; callers decide what to do about it.
#[must_use]
pub fn has_dangerous_key<S: AsRef<str>>(keys: &[S]) -> bool {
    keys.iter().any(|k| is_dangerous_key(k.as_ref()))
}
