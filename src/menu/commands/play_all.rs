use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::MediaCatalog;
use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand};
use crate::player::{LaunchSpec, LocatedPlayer, PlayMode};
use crate::supervisor::PlaybackSupervisor;

/// Command to play every file in the catalog in listing order
pub struct PlayAllCommand {
    catalog: Arc<MediaCatalog>,
    player: Arc<LocatedPlayer>,
    supervisor: Arc<PlaybackSupervisor>,
    extra_args: Vec<String>,
}

impl PlayAllCommand {
    /// Creates a new PlayAllCommand
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
impl MenuCommand for PlayAllCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let entries = self.catalog.list()?;
        let spec = LaunchSpec::build(&self.player, PlayMode::All, &entries, &self.extra_args)?;
        let session = self.supervisor.start(&spec).await?;

        let mut output = format!(
            "Playing {} file(s) with {} (pid {})",
            entries.len(),
            self.player.kind,
            session.pid
        );

        if let Some(note) = &spec.note {
            output.push_str(&format!("\n{note}"));
        }

        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "play-all".to_string(),
            description: "Play all files".to_string(),
            args_hint: None,
        }
    }
}
