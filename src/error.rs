//! Error types for scanning and writing listings

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan.
///
/// Problems local to one subtree (an unreadable directory, a child whose
/// metadata vanished) are not errors here; the walker contains them.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Root path does not exist or cannot be canonicalized
    #[error("cannot resolve '{}': {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reference date or time does not match `YY/MM/DD HH:MM:SS`
    #[error("invalid time format: {date} {time}")]
    InvalidTimeFormat { date: String, time: String },

    /// Output listing could not be created or written
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
