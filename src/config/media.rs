use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Media catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory scanned for playable files.
    ///
    /// Falls back to the current working directory when unset and no
    /// directory is given on the command line.
    pub directory: Option<PathBuf>,
}
