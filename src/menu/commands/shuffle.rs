use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::MediaCatalog;
use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand};
use crate::player::{LaunchSpec, LocatedPlayer, PlayMode};
use crate::supervisor::PlaybackSupervisor;

/// Command to play every catalog file in a fresh random order
///
/// The order is drawn anew on each use; ffplay rejects this mode.
pub struct ShuffleCommand {
    catalog: Arc<MediaCatalog>,
    player: Arc<LocatedPlayer>,
    supervisor: Arc<PlaybackSupervisor>,
    extra_args: Vec<String>,
}

impl ShuffleCommand {
    /// Creates a new ShuffleCommand
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
impl MenuCommand for ShuffleCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let entries = self.catalog.list()?;
        let spec = LaunchSpec::build(&self.player, PlayMode::Shuffle, &entries, &self.extra_args)?;
        let session = self.supervisor.start(&spec).await?;

        Ok(format!(
            "Shuffling {} file(s) with {} (pid {})",
            entries.len(),
            self.player.kind,
            session.pid
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "shuffle".to_string(),
            description: "Shuffle all files".to_string(),
            args_hint: None,
        }
    }
}
