//! Error types for deepval.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Most operations in this workspace never fail: they degrade to a safe
//! value instead. Errors are reserved for the guard layer's depth ceilings
//! and regular-expression compilation.

use std::fmt;

use thiserror::Error;

/// Result type for deepval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for deepval operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a path-too-deep error.
    #[must_use]
    pub fn path_too_deep(depth: usize, limit: usize) -> Self {
        Self::new(ErrorKind::PathTooDeep { depth, limit })
    }

    /// Creates a recursion-too-deep error.
    #[must_use]
    pub fn recursion_too_deep(depth: usize, limit: usize) -> Self {
        Self::new(ErrorKind::RecursionTooDeep { depth, limit })
    }

    /// Creates an invalid regular expression error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Returns true if this error is one of the guard layer's range failures.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::PathTooDeep { .. } | ErrorKind::RecursionTooDeep { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A key path is longer than the configured ceiling.
    #[error("path depth {depth} exceeds maximum {limit}")]
    PathTooDeep {
        /// Number of keys in the path.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A recursive walk descended past the configured ceiling.
    #[error("recursion depth {depth} exceeds maximum {limit}")]
    RecursionTooDeep {
        /// The depth that was reached.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A regular expression could not be built.
    #[error("invalid regular expression /{pattern}/: {message}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Why compilation failed.
        message: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed.
    pub operation: Option<String>,
    /// The key path being processed, if any.
    pub path: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the key path.
    #[must_use]
    pub fn with_path<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.path = keys.iter().map(|k| k.as_ref().to_owned()).collect();
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = &self.operation {
            write!(f, "in {op}")?;
        }
        if !self.path.is_empty() {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at {}", self.path.join("."))?;
        }
        Ok(())
    }
}
