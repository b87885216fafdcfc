//! Integration tests for configuration loading.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use playdeck::PlaydeckError;
use playdeck::config::Config;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn parses_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[general]
log_level = "debug"

[media]
directory = "/srv/media"

[player]
preferred = "vlc"
extra_args = ["--volume", "50"]
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.media.directory, Some(PathBuf::from("/srv/media")));
    assert_eq!(config.player.preferred.as_deref(), Some("vlc"));
    assert_eq!(config.player.extra_args, ["--volume", "50"]);
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, "info");
    assert!(config.media.directory.is_none());
    assert!(config.player.preferred.is_none());
    assert!(config.player.extra_args.is_empty());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[general]
log_level = "warn"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, "warn");
    assert!(config.player.preferred.is_none());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "not = [toml");

    assert!(matches!(
        Config::load_from(&path),
        Err(PlaydeckError::TomlParse(_))
    ));
}
