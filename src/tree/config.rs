//! Configuration types for the tree walker

use super::filter::TimeFilter;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Time predicate every non-root entry must pass
    pub filter: TimeFilter,
    /// Deepest recursion level whose children are listed (root = 1).
    /// Directories below the limit are still recorded but not entered.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    pub fn new(filter: TimeFilter) -> Self {
        Self {
            filter,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check if children at this recursion level must not be listed
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
