//! Timescan - split a directory tree into files and directories modified before or after a time

pub mod error;
pub mod fs;
pub mod output;
pub mod time;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use fs::{FileSystem, OsFileSystem};
pub use output::{OutputConfig, SortOrder, write_entries, write_scan};
pub use time::{TimeMode, format_timestamp, matches, matches_named, parse_reference_time};
pub use tree::{Entry, ScanResult, TimeFilter, TreeWalker, WalkerConfig, traverse};
