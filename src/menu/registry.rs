use super::types::{CommandMetadata, CommandResult, MenuCommand, MenuError};

/// Ordered registry of menu entries.
///
/// Registration order defines the numbers the user types: the first
/// registered command is entry 1. The controller appends its own quit entry
/// after the registered ones.
#[derive(Default)]
pub struct MenuRegistry {
    commands: Vec<Box<dyn MenuCommand>>,
}

impl MenuRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command as the next menu entry.
    pub fn register(&mut self, command: Box<dyn MenuCommand>) {
        self.commands.push(command);
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Metadata of every entry, in display order.
    pub fn metadata(&self) -> Vec<CommandMetadata> {
        self.commands.iter().map(|command| command.metadata()).collect()
    }

    /// Executes the entry the 1-based `selection` refers to.
    ///
    /// # Errors
    /// Returns [`MenuError::InvalidSelection`] when `selection` does not name
    /// an entry, or the entry's own error when it fails.
    pub async fn execute(&self, selection: usize, args: &[String]) -> CommandResult {
        let command = selection
            .checked_sub(1)
            .and_then(|index| self.commands.get(index))
            .ok_or_else(|| {
                MenuError::InvalidSelection(format!(
                    "no menu entry {selection} (valid: 1-{})",
                    self.commands.len() + 1
                ))
            })?;

        command.execute(args).await
    }
}
