//! Records produced by a scan

use std::path::PathBuf;

/// One file or directory selected by the walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Full path for files and the root, depth-encoded name for subdirectories
    pub display_path: String,
    /// Modification time in unix seconds
    pub modified: i64,
}

impl Entry {
    pub fn new(display_path: impl Into<String>, modified: i64) -> Self {
        Self {
            display_path: display_path.into(),
            modified,
        }
    }
}

/// Everything collected by one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Regular files, in visit order
    pub files: Vec<Entry>,
    /// Directories in visit order; the scan root is always first
    pub dirs: Vec<Entry>,
    /// Directories whose children could not be listed
    pub unreadable: Vec<PathBuf>,
}

impl ScanResult {
    /// The scan root entry.
    pub fn root(&self) -> Option<&Entry> {
        self.dirs.first()
    }
}
