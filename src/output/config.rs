//! Output configuration types

use std::path::PathBuf;

use clap::ValueEnum;

pub const DEFAULT_FILE_LIST: &str = "file_list.txt";
pub const DEFAULT_DIR_LIST: &str = "dir_list.txt";

/// Ordering applied to a listing before it is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Keep visit order
    #[default]
    None,
    /// Most recently modified first
    Newest,
    /// Least recently modified first
    Oldest,
}

/// Where and how the two listings are written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub file_list: PathBuf,
    pub dir_list: PathBuf,
    pub sort: SortOrder,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_list: PathBuf::from(DEFAULT_FILE_LIST),
            dir_list: PathBuf::from(DEFAULT_DIR_LIST),
            sort: SortOrder::None,
        }
    }
}
