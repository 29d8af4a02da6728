//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::path::Path;

/// Depth marker for a directory found at recursion `depth` (root = 1):
/// `depth - 1` colons.
pub fn depth_marker(depth: usize) -> String {
    ":".repeat(depth.saturating_sub(1))
}

/// Display name of a subdirectory: depth marker followed by its bare name.
pub fn depth_encoded_name(depth: usize, name: &OsStr) -> String {
    format!("{}{}", depth_marker(depth), name.to_string_lossy())
}

/// Render a path for a listing line.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
