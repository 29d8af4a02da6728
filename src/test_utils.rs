//! Test utilities: a scripted in-memory file system and temporary trees on disk.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use crate::fs::FileSystem;

const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum Node {
    Dir { mtime: i64, children: Vec<OsString> },
    File { mtime: i64 },
    Special { mtime: i64 },
}

impl Node {
    fn mtime(&self) -> i64 {
        match self {
            Node::Dir { mtime, .. } | Node::File { mtime } | Node::Special { mtime } => *mtime,
        }
    }
}

/// In-memory [`FileSystem`] with scripted contents and failures.
///
/// Paths are absolute and already clean. Children are listed in the order
/// they were added.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    nodes: HashMap<PathBuf, Node>,
    links: HashMap<PathBuf, PathBuf>,
    unlistable: HashSet<PathBuf>,
    no_metadata: HashSet<PathBuf>,
    unresolvable: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    /// Create a file system holding a single root directory.
    pub fn new(root: impl Into<PathBuf>, mtime: i64) -> Self {
        let mut fs = Self::default();
        fs.nodes.insert(
            root.into(),
            Node::Dir {
                mtime,
                children: Vec::new(),
            },
        );
        fs
    }

    pub fn dir(self, path: impl Into<PathBuf>, mtime: i64) -> Self {
        self.insert(
            path.into(),
            Node::Dir {
                mtime,
                children: Vec::new(),
            },
        )
    }

    pub fn file(self, path: impl Into<PathBuf>, mtime: i64) -> Self {
        self.insert(path.into(), Node::File { mtime })
    }

    /// A node that is neither a file nor a directory (socket, device, ...).
    pub fn special(self, path: impl Into<PathBuf>, mtime: i64) -> Self {
        self.insert(path.into(), Node::Special { mtime })
    }

    /// Symlink listed in its parent directory.
    pub fn symlink(mut self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.attach_to_parent(&path);
        self.links.insert(path, target.into());
        self
    }

    /// Symlink whose parent is not part of the scripted tree.
    pub fn symlink_root(mut self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.links.insert(path.into(), target.into());
        self
    }

    /// Make listing this directory fail with permission denied.
    pub fn deny_listing(mut self, path: impl Into<PathBuf>) -> Self {
        self.unlistable.insert(path.into());
        self
    }

    /// Make metadata lookups on this exact path fail.
    pub fn hide_metadata(mut self, path: impl Into<PathBuf>) -> Self {
        self.no_metadata.insert(path.into());
        self
    }

    /// Make canonicalizing this exact path fail, as if it vanished mid-scan.
    pub fn fail_canonicalize(mut self, path: impl Into<PathBuf>) -> Self {
        self.unresolvable.insert(path.into());
        self
    }

    fn insert(mut self, path: PathBuf, node: Node) -> Self {
        self.attach_to_parent(&path);
        self.nodes.insert(path, node);
        self
    }

    fn attach_to_parent(&mut self, path: &Path) {
        let parent = path.parent().expect("scripted path needs a parent");
        let name = path.file_name().expect("scripted path needs a name");
        match self.nodes.get_mut(parent) {
            Some(Node::Dir { children, .. }) => children.push(name.to_os_string()),
            _ => panic!("parent of {} is not a scripted directory", path.display()),
        }
    }

    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        let mut resolved = PathBuf::new();
        let mut hops = 0;
        for component in path.components() {
            resolved.push(component);
            while let Some(target) = self.links.get(&resolved) {
                hops += 1;
                if hops > MAX_LINK_HOPS {
                    return Err(io::Error::other("too many levels of symbolic links"));
                }
                resolved = target.clone();
            }
        }
        if self.nodes.contains_key(&resolved) {
            Ok(resolved)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
        }
    }

    fn lookup(&self, path: &Path) -> Option<&Node> {
        self.resolve(path).ok().and_then(|p| self.nodes.get(&p))
    }
}

impl FileSystem for MemoryFileSystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        if self.unresolvable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"));
        }
        self.resolve(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lookup(path), Some(Node::Dir { .. }))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.lookup(path), Some(Node::File { .. }))
    }

    fn mod_time(&self, path: &Path) -> Option<i64> {
        if self.no_metadata.contains(path) {
            return None;
        }
        self.lookup(path).map(Node::mtime)
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let resolved = self.resolve(path)?;
        if self.unlistable.contains(&resolved) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        match self.nodes.get(&resolved) {
            Some(Node::Dir { children, .. }) => Ok(children.clone()),
            _ => Err(io::Error::other("not a directory")),
        }
    }
}

/// Convert unix seconds to a `SystemTime`.
pub fn system_time(secs: i64) -> SystemTime {
    let offset = Duration::from_secs(secs.unsigned_abs());
    if secs >= 0 {
        SystemTime::UNIX_EPOCH + offset
    } else {
        SystemTime::UNIX_EPOCH - offset
    }
}

/// A temporary directory tree for testing against the real file system.
///
/// Creating an entry bumps its parent's mtime, so set directory times
/// after their contents are in place.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory (and parents) with the given mtime.
    pub fn add_dir(&self, path: &str, mtime: i64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        self.set_mtime(path, mtime);
        full_path
    }

    /// Create a file (and parent directories) with the given mtime.
    pub fn add_file(&self, path: &str, mtime: i64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, path).expect("Failed to write file");
        self.set_mtime(path, mtime);
        full_path
    }

    /// Set the mtime of an existing file or directory.
    pub fn set_mtime(&self, path: &str, mtime: i64) {
        let full_path = self.dir.path().join(path);
        File::open(&full_path)
            .and_then(|f| f.set_modified(system_time(mtime)))
            .expect("Failed to set mtime");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
