use std::sync::Arc;

use async_trait::async_trait;

use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand};
use crate::supervisor::{PlaybackSupervisor, StopOutcome};

/// Command to stop the active playback session
///
/// Stopping with nothing running is informational, not an error.
pub struct StopCommand {
    supervisor: Arc<PlaybackSupervisor>,
}

impl StopCommand {
    /// Creates a new StopCommand
    pub fn new(supervisor: Arc<PlaybackSupervisor>) -> Self {
        Self { supervisor }
    }
}

#[async_trait]
impl MenuCommand for StopCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        match self.supervisor.stop().await? {
            StopOutcome::Stopped { pid } => Ok(format!("Stopped player (pid {pid})")),
            StopOutcome::NothingRunning => Ok("Nothing is playing".to_string()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "stop".to_string(),
            description: "Stop playback".to_string(),
            args_hint: None,
        }
    }
}
