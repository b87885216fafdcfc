/// Menu entry implementations
mod list;
mod play;
mod play_all;
mod refresh;
mod shuffle;
mod status;
mod stop;
mod utils;

pub use list::ListCommand;
pub use play::PlayCommand;
pub use play_all::PlayAllCommand;
pub use refresh::RefreshCommand;
pub use shuffle::ShuffleCommand;
pub use status::StatusCommand;
pub use stop::StopCommand;

use std::sync::Arc;

use super::MenuRegistry;
use crate::{catalog::MediaCatalog, player::LocatedPlayer, supervisor::PlaybackSupervisor};

/// Registers all menu entries in display order
///
/// # Arguments
///
/// * `registry` - Mutable reference to the menu registry
/// * `catalog` - Catalog over the target media directory
/// * `player` - Player binary resolved for this run
/// * `supervisor` - Supervisor owning the playback session
/// * `extra_args` - Configured arguments appended to every launch
pub fn register_commands(
    registry: &mut MenuRegistry,
    catalog: &Arc<MediaCatalog>,
    player: &Arc<LocatedPlayer>,
    supervisor: &Arc<PlaybackSupervisor>,
    extra_args: &[String],
) {
    registry.register(Box::new(ListCommand::new(catalog.clone())));
    registry.register(Box::new(PlayCommand::new(
        catalog.clone(),
        player.clone(),
        supervisor.clone(),
        extra_args.to_vec(),
    )));
    registry.register(Box::new(PlayAllCommand::new(
        catalog.clone(),
        player.clone(),
        supervisor.clone(),
        extra_args.to_vec(),
    )));
    registry.register(Box::new(ShuffleCommand::new(
        catalog.clone(),
        player.clone(),
        supervisor.clone(),
        extra_args.to_vec(),
    )));
    registry.register(Box::new(StopCommand::new(supervisor.clone())));
    registry.register(Box::new(StatusCommand::new(supervisor.clone())));
    registry.register(Box::new(RefreshCommand::new(catalog.clone())));
}
