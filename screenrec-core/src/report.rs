//! Post-recording inspection of the output file.

use std::fs;
use std::path::Path;

/// Whether ffmpeg left a file behind, and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Present { size_bytes: u64 },
    Missing,
}

impl OutputStatus {
    #[must_use]
    pub fn exists(self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// Checks for a regular file at `path` and reads its size.
///
/// Directories and unreadable paths count as missing.
#[must_use]
pub fn inspect_output(path: &Path) -> OutputStatus {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => OutputStatus::Present {
            size_bytes: meta.len(),
        },
        Ok(_) => {
            log::debug!("{} exists but is not a file", path.display());
            OutputStatus::Missing
        }
        Err(_) => OutputStatus::Missing,
    }
}
