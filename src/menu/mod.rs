//! Interactive menu bound to catalog and supervisor operations.
//!
//! The controller renders a numbered menu, blocks on one line of input per
//! operation and dispatches it to the registered command. Everything the
//! commands report - success or failure - is printed and the loop continues;
//! only end of input or the quit entry leaves the loop, stopping any active
//! playback on the way out.

mod commands;
pub mod formatting;
mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use registry::MenuRegistry;
pub use types::{CommandMetadata, CommandResult, MenuCommand, MenuError};

use std::{
    io::{self, Write},
    sync::Arc,
};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use formatting::{format_description, format_entry, format_error, format_header};

use crate::{
    catalog::MediaCatalog,
    player::LocatedPlayer,
    supervisor::{PlaybackSupervisor, StopOutcome},
};

/// The interactive loop binding user choices to catalog and supervisor
/// operations.
pub struct MenuController {
    registry: MenuRegistry,
    catalog: Arc<MediaCatalog>,
    player: Arc<LocatedPlayer>,
    supervisor: Arc<PlaybackSupervisor>,
}

impl MenuController {
    /// Creates a controller with all menu entries registered.
    pub fn new(
        catalog: Arc<MediaCatalog>,
        player: Arc<LocatedPlayer>,
        supervisor: Arc<PlaybackSupervisor>,
        extra_args: Vec<String>,
    ) -> Self {
        let mut registry = MenuRegistry::new();
        commands::register_commands(&mut registry, &catalog, &player, &supervisor, &extra_args);

        Self {
            registry,
            catalog,
            player,
            supervisor,
        }
    }

    /// Runs the menu until the user quits or input ends.
    ///
    /// Recoverable errors are reported textually and the loop continues.
    /// On exit, any active playback is stopped first.
    ///
    /// # Errors
    /// Returns error only for I/O failures on the interactive terminal.
    pub async fn run(&self) -> io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        self.print_menu();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let input = line.trim();

            if input.is_empty() {
                self.print_menu();
                continue;
            }

            if self.is_quit(input) {
                break;
            }

            let report = match parse_selection(input) {
                Ok((selection, args)) => self.registry.execute(selection, &args).await,
                Err(error) => Err(error),
            };

            match report {
                Ok(output) => {
                    if !output.trim().is_empty() {
                        println!("{output}");
                    }
                }
                Err(error) => {
                    debug!(%error, input, "menu action failed");
                    println!("{}", format_error(&error.to_string()));
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    fn is_quit(&self, input: &str) -> bool {
        if matches!(input, "q" | "quit" | "exit") {
            return true;
        }

        input
            .parse::<usize>()
            .is_ok_and(|selection| selection == self.registry.len() + 1)
    }

    fn print_menu(&self) {
        println!();
        println!(
            "{}",
            format_header(&format!("playdeck - {}", self.catalog.directory().display()))
        );
        println!(
            "{}",
            format_description(&format!(
                "player: {} ({})",
                self.player.kind,
                self.player.path.display()
            ))
        );
        println!();

        for (index, metadata) in self.registry.metadata().iter().enumerate() {
            let mut label = metadata.description.clone();
            if let Some(hint) = &metadata.args_hint {
                label.push(' ');
                label.push_str(&format_description(hint));
            }
            println!("  {}", format_entry(index + 1, &label));
        }
        println!("  {}", format_entry(self.registry.len() + 1, "Quit"));

        println!();
        println!(
            "{}",
            format_description("Enter a number; blank reshows the menu. Example: 2 3 plays the third file.")
        );
    }

    async fn shutdown(&self) {
        match self.supervisor.stop().await {
            Ok(StopOutcome::Stopped { pid }) => println!("Stopped player (pid {pid})"),
            Ok(StopOutcome::NothingRunning) => {}
            Err(error) => println!("{}", format_error(&error.to_string())),
        }
    }
}

/// Parses a menu input line into a selection number and its arguments.
///
/// # Errors
/// Returns [`MenuError::InvalidSelection`] for empty input or a non-numeric
/// first token.
pub fn parse_selection(input: &str) -> Result<(usize, Vec<String>), MenuError> {
    let mut tokens = input.split_whitespace();

    let Some(first) = tokens.next() else {
        return Err(MenuError::InvalidSelection(
            "enter a menu number".to_string(),
        ));
    };

    let selection = first.parse().map_err(|_| {
        MenuError::InvalidSelection(format!("'{first}' is not a menu number"))
    })?;

    Ok((selection, tokens.map(str::to_string).collect()))
}
