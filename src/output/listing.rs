//! Line-oriented listing output: `[YY/MM/DD HH:MM:SS] <path>`
//!
//! Listings are rendered into a temporary file next to their target and
//! only moved into place once fully written, so a failed run never leaves
//! a truncated or half-written listing behind.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::error::{Result, ScanError};
use crate::time::format_timestamp;
use crate::tree::Entry;

/// Write one line per entry, in the given order.
pub fn write_listing<W: Write>(writer: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(
            writer,
            "{} {}",
            format_timestamp(entry.modified),
            entry.display_path
        )?;
    }
    Ok(())
}

/// A fully written listing waiting to replace its target.
/// Dropping it without [`StagedListing::commit`] removes the temporary file.
pub struct StagedListing {
    file: NamedTempFile,
    target: PathBuf,
}

impl StagedListing {
    /// Render `entries` into a temporary file in the target's directory.
    pub fn stage(target: &Path, entries: &[Entry]) -> Result<Self> {
        let io_error = |source| ScanError::Io {
            path: target.to_path_buf(),
            source,
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = temp_builder().tempfile_in(dir).map_err(io_error)?;

        let mut writer = BufWriter::new(file.as_file_mut());
        write_listing(&mut writer, entries).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        drop(writer);

        Ok(Self {
            file,
            target: target.to_path_buf(),
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Move the listing onto its target, replacing any existing file.
    pub fn commit(self) -> Result<()> {
        let target = self.target;
        self.file
            .persist(&target)
            .map(|_| ())
            .map_err(|e| ScanError::Io {
                path: target,
                source: e.error,
            })
    }
}

#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    // Listings are ordinary output files, not private scratch files
    let mut builder = Builder::new();
    builder
        .prefix(".timescan")
        .permissions(Permissions::from_mode(0o644));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".timescan");
    builder
}

/// Write the listing to `path`, replacing it only once fully written.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    StagedListing::stage(path, entries)?.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::fs;
    use tempfile::TempDir;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("/tmp/R", 1_700_000_000),
            Entry::new(":A", 1_600_000_000),
            Entry::new("::name with spaces", 0),
        ]
    }

    fn dir_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_listing_one_line_per_entry() {
        let mut out = Vec::new();
        write_listing(&mut out, &entries()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let line = Regex::new(r"^\[\d{2}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\] (.*)$").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(text.ends_with('\n'));
        for (line_text, entry) in lines.iter().zip(entries()) {
            let caps = line.captures(line_text).expect("malformed line");
            assert_eq!(&caps[1], entry.display_path);
        }
    }

    #[test]
    fn test_write_listing_empty_is_empty() {
        let mut out = Vec::new();
        write_listing(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_listing_uses_formatted_timestamp() {
        let mut out = Vec::new();
        write_listing(&mut out, &[Entry::new("x", 42)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{} x\n", format_timestamp(42))
        );
    }

    #[test]
    fn test_write_entries_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "stale content that is much longer than the listing\n".repeat(50))
            .unwrap();

        write_entries(&path, &entries()).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        write_entries(&path, &entries()).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.lines().count(), 3);
        assert!(!second.contains("stale"));
        assert_eq!(dir_names(dir.path()), vec!["list.txt"]);
    }

    #[test]
    fn test_write_entries_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("list.txt");
        let err = write_entries(&path, &entries()).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_dropped_stage_leaves_target_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "previous\n").unwrap();

        let staged = StagedListing::stage(&path, &entries()).unwrap();
        assert_eq!(staged.target(), path.as_path());
        drop(staged);

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
        assert_eq!(dir_names(dir.path()), vec!["list.txt"]);
    }
}
