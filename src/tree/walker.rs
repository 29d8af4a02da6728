//! TreeWalker - depth-first scan that splits a tree into files and directories

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Result, ScanError};
use crate::fs::{FileSystem, OsFileSystem};
use crate::time::TimeMode;

use super::config::WalkerConfig;
use super::entry::{Entry, ScanResult};
use super::filter::TimeFilter;
use super::utils::{depth_encoded_name, display_path};

/// Recursive walker applying a time filter to every entry below a root.
///
/// A directory that fails the filter is pruned along with its whole subtree.
/// The root itself is always recorded, whatever its mtime.
pub struct TreeWalker<F = OsFileSystem> {
    config: WalkerConfig,
    fs: F,
}

impl TreeWalker<OsFileSystem> {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            fs: OsFileSystem::new(),
        }
    }
}

impl<F: FileSystem> TreeWalker<F> {
    /// Walk through another file-system provider.
    pub fn with_file_system<G: FileSystem>(self, fs: G) -> TreeWalker<G> {
        TreeWalker {
            config: self.config,
            fs,
        }
    }

    /// Scan `root`. Fails only if the root itself cannot be resolved;
    /// unreadable subdirectories are reported in [`ScanResult::unreadable`].
    pub fn walk(&self, root: &Path) -> Result<ScanResult> {
        let resolution_error = |source| ScanError::PathResolution {
            path: root.to_path_buf(),
            source,
        };

        let root_path = self.fs.canonicalize(root).map_err(resolution_error)?;
        let root_mtime = self.fs.mod_time(&root_path).ok_or_else(|| {
            resolution_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "cannot read modification time",
            ))
        })?;

        let mut result = ScanResult::default();
        result
            .dirs
            .push(Entry::new(display_path(&root_path), root_mtime));

        let mut ancestors = Vec::new();
        self.walk_dir(&root_path, 1, &mut ancestors, &mut result);

        Ok(result)
    }

    fn walk_dir(
        &self,
        dir: &Path,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        result: &mut ScanResult,
    ) {
        if self.config.beyond_max_depth(depth) {
            debug!("depth limit reached at '{}'", dir.display());
            return;
        }

        let names = match self.fs.list_children(dir) {
            Ok(names) => names,
            Err(e) => {
                warn!("failed to open directory '{}': {}", dir.display(), e);
                result.unreadable.push(dir.to_path_buf());
                return;
            }
        };
        debug!("entering '{}' ({} entries)", dir.display(), names.len());

        ancestors.push(dir.to_path_buf());

        for name in names {
            let path = dir.join(&name);

            // Entries that vanish or cannot be stat'ed are skipped quietly
            let Some(mtime) = self.fs.mod_time(&path) else {
                continue;
            };
            if !self.config.filter.is_included(mtime) {
                continue;
            }

            if self.fs.is_dir(&path) {
                result
                    .dirs
                    .push(Entry::new(depth_encoded_name(depth + 1, &name), mtime));
                self.descend(&path, depth + 1, ancestors, result);
            } else if self.fs.is_file(&path) {
                result.files.push(Entry::new(display_path(&path), mtime));
            }
        }

        ancestors.pop();
    }

    fn descend(
        &self,
        path: &Path,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        result: &mut ScanResult,
    ) {
        let canonical = match self.fs.canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                warn!("failed to open directory '{}': {}", path.display(), e);
                result.unreadable.push(path.to_path_buf());
                return;
            }
        };

        if ancestors.contains(&canonical) {
            warn!(
                "not descending into '{}': symlink cycle back to '{}'",
                path.display(),
                canonical.display()
            );
            return;
        }

        self.walk_dir(&canonical, depth, ancestors, result);
    }
}

/// Scan `root` on the local disk with default settings.
pub fn traverse(root: &Path, reference: i64, mode: TimeMode) -> Result<ScanResult> {
    TreeWalker::new(WalkerConfig::new(TimeFilter::new(reference, mode))).walk(root)
}
