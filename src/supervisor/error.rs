use std::path::PathBuf;

/// Errors that can occur during playback supervision
#[derive(thiserror::Error, Debug)]
pub enum SupervisorError {
    /// The player could not be spawned at all
    #[error("Failed to spawn player: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The player exited within the settle window after spawning
    #[error("Player exited immediately after launch")]
    LaunchFailure,

    /// The playback state file could not be read or written
    #[error("Cannot access playback state file {path:?}: {source}")]
    StateFile {
        /// State file location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
