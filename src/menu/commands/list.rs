use std::sync::Arc;

use async_trait::async_trait;

use super::utils::render_listing;
use crate::catalog::MediaCatalog;
use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand};

/// Command to list the playable files in the media directory
///
/// Shows each file with the number used by the play entry.
pub struct ListCommand {
    catalog: Arc<MediaCatalog>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(catalog: Arc<MediaCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl MenuCommand for ListCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        render_listing(&self.catalog)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "Show media files".to_string(),
            args_hint: None,
        }
    }
}
