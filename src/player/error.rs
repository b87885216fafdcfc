use super::PlayerKind;

/// Errors that can occur during player discovery and launch-spec construction
#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    /// None of the supported player binaries resolved on the search path
    #[error("No supported media player found (tried mpv, mplayer, vlc, ffplay)")]
    NoPlayerAvailable,

    /// The chosen player cannot perform the requested playback mode
    #[error("{player} does not support {mode} playback")]
    UnsupportedMode {
        /// Player that rejected the mode
        player: PlayerKind,
        /// Name of the rejected mode
        mode: &'static str,
    },

    /// The catalog produced no files for a multi-file mode
    #[error("No media files to play")]
    NoMediaFiles,
}
