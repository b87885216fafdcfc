mod general;
mod loading;
mod media;
mod paths;
mod player;

use serde::{Deserialize, Serialize};

pub use general::GeneralConfig;
pub use media::MediaConfig;
pub use paths::ConfigPaths;
pub use player::PlayerConfig;

/// Main configuration structure for playdeck.
///
/// Loaded from `config.toml` in the playdeck configuration directory.
/// Every section falls back to its defaults when absent, so an empty or
/// missing file yields a fully usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Media catalog settings.
    #[serde(default)]
    pub media: MediaConfig,

    /// Player selection and launch settings.
    #[serde(default)]
    pub player: PlayerConfig,
}
