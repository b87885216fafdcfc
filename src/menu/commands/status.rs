use std::sync::Arc;

use async_trait::async_trait;

use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand};
use crate::supervisor::{PlaybackSupervisor, SessionStatus};

/// Command to show whether a player process is currently running
pub struct StatusCommand {
    supervisor: Arc<PlaybackSupervisor>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(supervisor: Arc<PlaybackSupervisor>) -> Self {
        Self { supervisor }
    }
}

#[async_trait]
impl MenuCommand for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        match self.supervisor.query() {
            SessionStatus::Idle => Ok("Nothing is playing".to_string()),
            SessionStatus::Running { pid, description } => {
                let mut output = format!("Playing (pid {pid})");
                if let Some(description) = description {
                    output.push_str(&format!("\n  {description}"));
                }
                Ok(output)
            }
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show playback status".to_string(),
            args_hint: None,
        }
    }
}
