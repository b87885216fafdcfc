//! Playdeck entry point - interactive media playback menu.
//!
//! Resolves a player binary, builds the catalog over the target directory
//! and hands control to the interactive menu. A missing player is the one
//! fatal condition: it is reported and the process exits before the loop
//! starts.

use std::{env, path::PathBuf, process, sync::Arc};

use clap::Parser;
use tracing::warn;

use playdeck::{
    catalog::MediaCatalog,
    config::Config,
    menu::{MenuController, formatting::format_error},
    player::{self, PathResolver, PlayerKind},
    supervisor::PlaybackSupervisor,
    tracing_config,
};

/// Interactive media playback menu.
#[derive(Parser, Debug)]
#[command(name = "playdeck", version, about = "Interactive media playback menu")]
struct Cli {
    /// Directory to scan for media files (defaults to the configured
    /// directory, then the current working directory)
    directory: Option<PathBuf>,

    /// Prefer this player binary (mpv, mplayer, vlc or ffplay)
    #[arg(long)]
    player: Option<String>,

    /// Log to the console instead of the log file
    #[arg(long)]
    console_log: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!(
                "{}",
                format_error(&format!("Ignoring configuration: {error}"))
            );
            Config::default()
        }
    };

    if cli.console_log {
        tracing_config::init(&config.general.log_level)?;
    } else {
        tracing_config::init_with_file(&config.general.log_level)?;
    }

    let preferred = preferred_player(cli.player.as_deref(), &config);

    let located = match player::locate(&PathResolver, preferred) {
        Ok(located) => located,
        Err(error) => {
            eprintln!("{}", format_error(&error.to_string()));
            process::exit(1);
        }
    };

    let directory = match cli.directory.or_else(|| config.media.directory.clone()) {
        Some(directory) => directory,
        None => env::current_dir()?,
    };

    let catalog = Arc::new(MediaCatalog::new(directory));
    let supervisor = Arc::new(PlaybackSupervisor::with_default_paths()?);

    let controller = MenuController::new(
        catalog,
        Arc::new(located),
        supervisor,
        config.player.extra_args.clone(),
    );

    controller.run().await?;

    Ok(())
}

fn preferred_player(cli_player: Option<&str>, config: &Config) -> Option<PlayerKind> {
    let name = cli_player.or(config.player.preferred.as_deref())?;

    let kind = PlayerKind::from_name(name);
    if kind.is_none() {
        warn!(name, "unknown player name, using the default priority list");
    }

    kind
}
