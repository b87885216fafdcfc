//! Playdeck - interactive media playback menu for the terminal.
//!
//! Playdeck enumerates the media files in a directory and hands playback to
//! whichever external player is installed on the host (mpv, mplayer, VLC or
//! ffplay). The spawned player runs detached in its own process group and is
//! tracked through a persisted state file, so it can be queried or stopped
//! later - even by a fresh playdeck instance after the original one exited.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use playdeck::catalog::MediaCatalog;
//!
//! // Scan a directory for playable files
//! let catalog = MediaCatalog::new("/home/user/Music");
//! for entry in catalog.list().unwrap_or_default() {
//!     println!("{}", entry.file_name());
//! }
//! ```

/// Configuration schema and path resolution.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Media file discovery and selection.
pub mod catalog;

/// Interactive menu bound to catalog and supervisor operations.
pub mod menu;

/// Player binary discovery and launch-spec construction.
pub mod player;

/// Lifecycle management for the detached player process.
pub mod supervisor;

/// Tracing and log output configuration.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{PlaydeckError, Result};
