//! File-system access used by the tree walker
//!
//! The walker only talks to a [`FileSystem`], so it can run against the real
//! disk ([`OsFileSystem`]) or a scripted tree in tests.

use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Primitive file-system queries needed for a scan.
pub trait FileSystem {
    /// Resolve `path` to an absolute path with symlinks resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Last modification time in unix seconds, `None` if it cannot be read.
    fn mod_time(&self, path: &Path) -> Option<i64>;

    /// Names of the immediate children of `path`, in native listing order,
    /// without `.` and `..`.
    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct OsFileSystem {
    follow_links: bool,
}

impl OsFileSystem {
    pub fn new() -> Self {
        Self { follow_links: true }
    }

    /// When disabled, symlinks are reported as neither files nor directories.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        if self.follow_links {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        }
    }
}

impl Default for OsFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for OsFileSystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.metadata(path).is_ok_and(|m| m.is_file())
    }

    fn mod_time(&self, path: &Path) -> Option<i64> {
        let modified = self.metadata(path).and_then(|m| m.modified()).ok()?;
        Some(DateTime::<Utc>::from(modified).timestamp())
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        // read_dir never yields "." or ".."
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }
}
