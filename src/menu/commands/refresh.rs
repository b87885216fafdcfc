use std::sync::Arc;

use async_trait::async_trait;

use super::utils::render_listing;
use crate::catalog::MediaCatalog;
use crate::menu::types::{CommandMetadata, CommandResult, MenuCommand};

/// Command to rescan the media directory and show the fresh listing
///
/// Listings are recomputed on every request anyway; this entry exists so a
/// changed directory can be re-read explicitly from the menu.
pub struct RefreshCommand {
    catalog: Arc<MediaCatalog>,
}

impl RefreshCommand {
    /// Creates a new RefreshCommand
    pub fn new(catalog: Arc<MediaCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl MenuCommand for RefreshCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let listing = render_listing(&self.catalog)?;
        Ok(format!("Rescanned directory.\n\n{listing}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "refresh".to_string(),
            description: "Rescan the media directory".to_string(),
            args_hint: None,
        }
    }
}
