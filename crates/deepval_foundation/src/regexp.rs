//! Regular expression storage.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Flags in the order they are reported by [`RegExpData::flags`].
const FLAG_ORDER: &str = "dgimsuvy";

/// A compiled regular expression with its source text and flags.
///
/// Flags are stored in canonical order, so `"gi"` and `"ig"` produce the
/// same [`flags`](Self::flags) string.
#[derive(Clone, Debug)]
pub struct RegExpData {
    source: String,
    flags: String,
    last_index: usize,
    matcher: Regex,
}

impl RegExpData {
    /// Compiles `source` with `flags`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](crate::ErrorKind::InvalidPattern)
    /// if a flag is unknown or repeated, or the pattern does not compile.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self> {
        let source = source.into();
        let flags = canonical_flags(&source, flags)?;
        let matcher = RegexBuilder::new(&source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| Error::invalid_pattern(&source, e.to_string()))?;
        Ok(Self {
            source,
            flags,
            last_index: 0,
            matcher,
        })
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the flags in canonical order.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns true if the given flag is set.
    #[must_use]
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Returns the position the next global or sticky search starts from.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.last_index
    }

    /// Sets the position the next global or sticky search starts from.
    pub fn set_last_index(&mut self, index: usize) {
        self.last_index = index;
    }

    /// Returns true if the pattern matches anywhere in `haystack`.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.matcher.is_match(haystack)
    }

    /// Returns a copy with the same source and flags and no execution state.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self {
            source: self.source.clone(),
            flags: self.flags.clone(),
            last_index: 0,
            matcher: self.matcher.clone(),
        }
    }
}

fn canonical_flags(source: &str, flags: &str) -> Result<String> {
    for (i, flag) in flags.char_indices() {
        if !FLAG_ORDER.contains(flag) {
            return Err(Error::invalid_pattern(
                source,
                format!("unknown flag '{flag}'"),
            ));
        }
        if flags[..i].contains(flag) {
            return Err(Error::invalid_pattern(
                source,
                format!("duplicate flag '{flag}'"),
            ));
        }
    }
    if flags.contains('u') && flags.contains('v') {
        return Err(Error::invalid_pattern(
            source,
            "flags 'u' and 'v' are exclusive",
        ));
    }
    Ok(FLAG_ORDER.chars().filter(|c| flags.contains(*c)).collect())
}
