//! Container classification.

use std::fmt;

/// The traversal class of a value.
///
/// Every value falls into exactly one kind. Clone, merge, equality and the
/// path helpers all branch on this classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `undefined`, `null`, booleans, numbers and strings.
    Primitive,
    /// A date.
    Date,
    /// A regular expression.
    RegExp,
    /// A keyed map.
    Map,
    /// A set.
    Set,
    /// An array.
    Array,
    /// An object with no class.
    PlainObject,
    /// An instance of a named class.
    OtherObject,
}

impl Kind {
    /// Returns true for every kind that is a mutable container.
    #[must_use]
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::Primitive)
    }

    /// Returns true for plain objects and class instances.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::PlainObject | Self::OtherObject)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primitive => "primitive",
            Self::Date => "date",
            Self::RegExp => "regexp",
            Self::Map => "map",
            Self::Set => "set",
            Self::Array => "array",
            Self::PlainObject => "plain object",
            Self::OtherObject => "object",
        };
        f.write_str(name)
    }
}
