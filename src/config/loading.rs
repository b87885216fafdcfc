use std::{fs, path::Path};

use tracing::debug;

use super::{Config, ConfigPaths};
use crate::{PlaydeckError, Result};

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned instead so a
    /// fresh installation works without any setup.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::config_file()
            .map_err(|e| PlaydeckError::Config(format!("cannot resolve config directory: {e}")))?;

        if !path.exists() {
            debug!(path = ?path, "no configuration file found, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit file path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Config> {
        let file_content = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&file_content)
            .map_err(|e| PlaydeckError::toml_parse(e, Some(path)))?;

        Ok(config)
    }
}
