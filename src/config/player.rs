use serde::{Deserialize, Serialize};

/// Player selection and launch configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerConfig {
    /// Player binary to probe before the built-in priority list
    /// ("mpv", "mplayer", "vlc" or "ffplay").
    pub preferred: Option<String>,

    /// Extra arguments appended to every player invocation.
    pub extra_args: Vec<String>,
}
