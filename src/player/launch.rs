use std::path::PathBuf;

use rand::seq::SliceRandom;
use tracing::warn;

use super::{LocatedPlayer, PlayerError, PlayerKind};
use crate::catalog::MediaEntry;

/// Playback mode selected from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayMode {
    /// Play a single file.
    Single(PathBuf),

    /// Play every catalog file in listing order.
    All,

    /// Play every catalog file in a fresh random order.
    ///
    /// The permutation is drawn anew on every invocation and is not
    /// reproducible across runs.
    Shuffle,
}

impl PlayMode {
    fn name(&self) -> &'static str {
        match self {
            PlayMode::Single(_) => "single-file",
            PlayMode::All => "all-files",
            PlayMode::Shuffle => "shuffle",
        }
    }
}

/// A fully resolved spawn invocation: one player, one mode, concrete file
/// arguments.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Executable to spawn.
    pub program: PathBuf,

    /// Arguments passed to the executable.
    pub args: Vec<String>,

    /// Degradation notice to surface to the user, if the mode had to be
    /// downgraded for this player.
    pub note: Option<String>,
}

impl LaunchSpec {
    /// Builds the spawn invocation for `player` in the given mode.
    ///
    /// `entries` is the current catalog listing, already sorted; it supplies
    /// the file arguments for the multi-file modes. `extra_args` are appended
    /// user-configured arguments, placed before the file paths.
    ///
    /// ffplay cannot play more than one file: all-files mode degrades to the
    /// first listed file (with a notice), shuffle mode is rejected outright.
    ///
    /// # Errors
    /// Returns [`PlayerError::NoMediaFiles`] when a multi-file mode finds an
    /// empty catalog, and [`PlayerError::UnsupportedMode`] when the player
    /// rejects the mode.
    pub fn build(
        player: &LocatedPlayer,
        mode: PlayMode,
        entries: &[MediaEntry],
        extra_args: &[String],
    ) -> Result<LaunchSpec, PlayerError> {
        let mode_name = mode.name();
        let mut note = None;

        let files: Vec<PathBuf> = match mode {
            PlayMode::Single(path) => vec![path],
            PlayMode::All => {
                let mut files = entry_paths(entries)?;
                if player.kind == PlayerKind::Ffplay {
                    // ffplay takes exactly one input; documented degradation.
                    warn!("ffplay cannot play multiple files, playing only the first");
                    files.truncate(1);
                    note = Some(format!(
                        "ffplay cannot play multiple files; playing only {}",
                        files[0].display()
                    ));
                }
                files
            }
            PlayMode::Shuffle => {
                if player.kind == PlayerKind::Ffplay {
                    return Err(PlayerError::UnsupportedMode {
                        player: player.kind,
                        mode: "shuffle",
                    });
                }
                let mut files = entry_paths(entries)?;
                files.shuffle(&mut rand::thread_rng());
                files
            }
        };

        let mut args = base_args(player.kind);
        args.extend(extra_args.iter().cloned());
        args.extend(
            files
                .iter()
                .map(|path| path.to_string_lossy().into_owned()),
        );

        tracing::debug!(
            player = %player.kind,
            mode = mode_name,
            files = files.len(),
            "built launch spec"
        );

        Ok(LaunchSpec {
            program: player.path.clone(),
            args,
            note,
        })
    }
}

fn entry_paths(entries: &[MediaEntry]) -> Result<Vec<PathBuf>, PlayerError> {
    if entries.is_empty() {
        return Err(PlayerError::NoMediaFiles);
    }

    Ok(entries
        .iter()
        .map(|entry| entry.path().to_path_buf())
        .collect())
}

fn base_args(kind: PlayerKind) -> Vec<String> {
    let args: &[&str] = match kind {
        PlayerKind::Mpv => &["--no-video", "--really-quiet"],
        PlayerKind::Mplayer => &[],
        PlayerKind::Vlc => &["--intf", "dummy", "--play-and-exit"],
        PlayerKind::Ffplay => &["-nodisp", "-autoexit"],
    };

    args.iter().map(|arg| (*arg).to_string()).collect()
}
