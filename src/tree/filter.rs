//! Modification-time filtering for tree walking

use crate::time::{self, TimeMode};

/// Reference time plus the side of it an entry must fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFilter {
    pub reference: i64,
    pub mode: TimeMode,
}

impl TimeFilter {
    pub fn new(reference: i64, mode: TimeMode) -> Self {
        Self { reference, mode }
    }

    pub fn before(reference: i64) -> Self {
        Self::new(reference, TimeMode::Before)
    }

    pub fn after(reference: i64) -> Self {
        Self::new(reference, TimeMode::After)
    }

    /// Check if an entry with this mtime is kept.
    pub fn is_included(&self, mtime: i64) -> bool {
        time::matches(mtime, self.reference, self.mode)
    }
}
