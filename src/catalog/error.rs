use std::path::PathBuf;

/// Errors that can occur during catalog operations
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog directory is missing or cannot be read
    #[error("Cannot read directory {path:?}: {source}")]
    DirectoryUnreadable {
        /// Directory that failed to list
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A selection index fell outside the current listing
    #[error("Selection {index} is out of range (valid: 1-{count})")]
    OutOfRange {
        /// The 1-based index that was requested
        index: usize,
        /// Number of entries in the listing at resolution time
        count: usize,
    },
}
