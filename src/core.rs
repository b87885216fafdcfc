use std::path::Path;

use thiserror::Error;

/// Top-level error type reported by the playdeck binary.
///
/// Subsystems carry their own error enums; this type covers configuration
/// loading and the I/O around it.
#[derive(Error, Debug)]
pub enum PlaydeckError {
    /// Configuration could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed as TOML.
    #[error("{0}")]
    TomlParse(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlaydeckError>;

impl PlaydeckError {
    /// Builds a TOML parse error with the offending path attached when known.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                PlaydeckError::TomlParse(format!(
                    "Failed to parse TOML at {:?}: {}",
                    clean_path, error
                ))
            }
            None => PlaydeckError::TomlParse(format!("Failed to parse TOML: {}", error)),
        }
    }
}
