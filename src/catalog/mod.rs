//! Media file discovery.
//!
//! The catalog scans a single directory (no recursion) for files whose
//! extension is on the media allow-list. Listings are recomputed on every
//! request so they always reflect the current directory contents.

mod error;

pub use error::CatalogError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

/// File extensions recognized as playable media, matched case-insensitively.
pub const MEDIA_EXTENSIONS: [&str; 10] = [
    "mp3", "wav", "flac", "aac", "ogg", "m4a", "mp4", "mkv", "webm", "avi",
];

/// A single playable file discovered in the catalog directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    file_name: String,
    path: PathBuf,
}

impl MediaEntry {
    pub(crate) fn new(file_name: String, path: PathBuf) -> Self {
        Self { file_name, path }
    }

    /// File name within the catalog directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Lists playable files in a target directory.
///
/// The catalog holds no listing state of its own; every call to [`list`]
/// re-reads the directory, so entries added or removed between calls are
/// picked up without any refresh step.
///
/// [`list`]: MediaCatalog::list
#[derive(Debug, Clone)]
pub struct MediaCatalog {
    directory: PathBuf,
}

impl MediaCatalog {
    /// Creates a catalog over the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory this catalog scans.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the playable files in the directory, sorted ascending by name.
    ///
    /// Only the top level is scanned. Subdirectories and files whose
    /// extension is not on [`MEDIA_EXTENSIONS`] never appear. Entries that
    /// cannot be inspected are skipped.
    ///
    /// # Errors
    /// Returns [`CatalogError::DirectoryUnreadable`] if the directory is
    /// missing or cannot be read.
    pub fn list(&self) -> Result<Vec<MediaEntry>, CatalogError> {
        let read_dir = fs::read_dir(&self.directory).map_err(|source| {
            CatalogError::DirectoryUnreadable {
                path: self.directory.clone(),
                source,
            }
        })?;

        let mut entries = Vec::new();

        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "skipping unreadable directory entry");
                    continue;
                }
            };

            let path = dir_entry.path();
            if !path.is_file() || !has_media_extension(&path) {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            entries.push(MediaEntry::new(file_name.to_string(), path));
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        debug!(
            directory = %self.directory.display(),
            count = entries.len(),
            "listed media files"
        );

        Ok(entries)
    }

    /// Resolves a 1-based menu selection into a catalog entry.
    ///
    /// # Errors
    /// Returns [`CatalogError::OutOfRange`] when `index` is outside
    /// `[1, count]`, or [`CatalogError::DirectoryUnreadable`] if the
    /// directory cannot be listed.
    pub fn resolve(&self, index: usize) -> Result<MediaEntry, CatalogError> {
        let mut entries = self.list()?;

        if index == 0 || index > entries.len() {
            return Err(CatalogError::OutOfRange {
                index,
                count: entries.len(),
            });
        }

        Ok(entries.swap_remove(index - 1))
    }
}

fn has_media_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            MEDIA_EXTENSIONS
                .iter()
                .any(|allowed| extension.eq_ignore_ascii_case(allowed))
        })
}
