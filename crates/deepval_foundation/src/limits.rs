//! Depth ceilings for path walks and recursive algorithms.

/// Depth ceilings applied by the guard layer and by deep merge.
///
/// The defaults are fixed: paths of up to 100 keys, recursion up to 50
/// levels, and deep merge up to 50 nested levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Longest key path accepted by [`validate_path_depth`](crate::guard::validate_path_depth).
    pub max_path_depth: usize,

    /// Deepest level accepted by [`check_recursion_depth`](crate::guard::check_recursion_depth).
    pub max_recursion_depth: usize,

    /// Deepest nesting level deep merge descends into before it stops.
    pub max_merge_depth: usize,
}

impl Limits {
    /// The default ceilings.
    pub const DEFAULT: Self = Self {
        max_path_depth: 100,
        max_recursion_depth: 50,
        max_merge_depth: 50,
    };

    /// Tighter ceilings for untrusted input.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_path_depth: 32,
            max_recursion_depth: 16,
            max_merge_depth: 16,
        }
    }

    /// Looser ceilings for large trusted documents.
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            max_path_depth: 1_000,
            max_recursion_depth: 500,
            max_merge_depth: 500,
        }
    }

    /// Builder method to set the path ceiling.
    #[must_use]
    pub const fn with_max_path_depth(mut self, depth: usize) -> Self {
        self.max_path_depth = depth;
        self
    }

    /// Builder method to set the recursion ceiling.
    #[must_use]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Builder method to set the merge ceiling.
    #[must_use]
    pub const fn with_max_merge_depth(mut self, depth: usize) -> Self {
        self.max_merge_depth = depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
