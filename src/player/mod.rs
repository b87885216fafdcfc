//! Player binary discovery and launch-spec construction.

mod error;
mod launch;
mod locator;

#[cfg(test)]
mod tests;

pub use error::PlayerError;
pub use launch::{LaunchSpec, PlayMode};
pub use locator::{ExecutableResolver, LocatedPlayer, PathResolver, locate};

use std::fmt;

/// Supported external player binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// mpv media player
    Mpv,

    /// MPlayer
    Mplayer,

    /// VLC media player
    Vlc,

    /// ffplay from the FFmpeg suite
    Ffplay,
}

impl PlayerKind {
    /// Probe order used by [`locate`]: the first available candidate wins.
    pub const PRIORITY: [PlayerKind; 4] = [
        PlayerKind::Mpv,
        PlayerKind::Mplayer,
        PlayerKind::Vlc,
        PlayerKind::Ffplay,
    ];

    /// Name of the executable on the search path.
    pub fn binary_name(self) -> &'static str {
        match self {
            PlayerKind::Mpv => "mpv",
            PlayerKind::Mplayer => "mplayer",
            PlayerKind::Vlc => "vlc",
            PlayerKind::Ffplay => "ffplay",
        }
    }

    /// Parses a player name as used in configuration and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mpv" => Some(PlayerKind::Mpv),
            "mplayer" => Some(PlayerKind::Mplayer),
            "vlc" => Some(PlayerKind::Vlc),
            "ffplay" => Some(PlayerKind::Ffplay),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}
