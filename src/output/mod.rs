//! Listing output
//!
//! - `config` - output paths and sort order
//! - `listing` - the `[YY/MM/DD HH:MM:SS] <path>` serializer
//! - `sort` - optional mtime ordering

mod config;
mod listing;
mod sort;

use log::warn;

use crate::error::Result;
use crate::tree::ScanResult;

// Re-export public types and functions
pub use config::{DEFAULT_DIR_LIST, DEFAULT_FILE_LIST, OutputConfig, SortOrder};
pub use listing::{StagedListing, write_entries, write_listing};
pub use sort::sort_entries;

/// Sort (if requested) and write both listings of a finished scan.
/// The scan root stays first in the directory listing.
///
/// Both listings are fully rendered before either target is touched. On
/// failure neither listing is left on disk.
pub fn write_scan(mut result: ScanResult, config: &OutputConfig) -> Result<()> {
    sort_entries(&mut result.files, config.sort, false);
    sort_entries(&mut result.dirs, config.sort, true);

    let files = StagedListing::stage(&config.file_list, &result.files)?;
    let dirs = StagedListing::stage(&config.dir_list, &result.dirs)?;

    files.commit()?;
    if let Err(e) = dirs.commit() {
        if let Err(cleanup) = std::fs::remove_file(&config.file_list) {
            warn!(
                "failed to remove '{}' after error: {}",
                config.file_list.display(),
                cleanup
            );
        }
        return Err(e);
    }
    Ok(())
}
