use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::MediaCatalog;
use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand, MenuError};
use crate::player::{LaunchSpec, LocatedPlayer, PlayMode};
use crate::supervisor::PlaybackSupervisor;

/// Command to play a single file selected by its listing number
///
/// Any running player is stopped before the new one starts.
pub struct PlayCommand {
    catalog: Arc<MediaCatalog>,
    player: Arc<LocatedPlayer>,
    supervisor: Arc<PlaybackSupervisor>,
    extra_args: Vec<String>,
}

impl PlayCommand {
    /// Creates a new PlayCommand
    pub fn new(
        catalog: Arc<MediaCatalog>,
        player: Arc<LocatedPlayer>,
        supervisor: Arc<PlaybackSupervisor>,
        extra_args: Vec<String>,
    ) -> Self {
        Self {
            catalog,
            player,
            supervisor,
            extra_args,
        }
    }
}

#[async_trait]
impl MenuCommand for PlayCommand {
    /// Resolves the 1-based file number and starts playback
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection` for a missing or non-numeric argument,
    /// `OutOfRange` for a number outside the current listing, and the
    /// supervisor's error if the launch fails.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let Some(raw) = args.first() else {
            return Err(MenuError::InvalidSelection(
                "a file number is required".to_string(),
            ));
        };

        let index: usize = raw.parse().map_err(|_| {
            MenuError::InvalidSelection(format!("'{raw}' is not a file number"))
        })?;

        let entry = self.catalog.resolve(index)?;
        let spec = LaunchSpec::build(
            &self.player,
            PlayMode::Single(entry.path().to_path_buf()),
            &[],
            &self.extra_args,
        )?;

        let session = self.supervisor.start(&spec).await?;

        Ok(format!(
            "Playing {} with {} (pid {})",
            entry.file_name(),
            self.player.kind,
            session.pid
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "play".to_string(),
            description: "Play a file by number".to_string(),
            args_hint: Some("<number>".to_string()),
        }
    }
}
