use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during menu command execution.
///
/// All of these are recoverable: the controller reports them textually and
/// the interactive loop continues.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The input did not name a menu entry, or an argument was missing or
    /// non-numeric.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// A catalog operation failed (unreadable directory, index out of range).
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Launch-spec construction failed (unsupported mode, empty catalog).
    #[error(transparent)]
    Player(#[from] crate::player::PlayerError),

    /// The playback supervisor failed (spawn failure, immediate exit, state
    /// file access).
    #[error(transparent)]
    Supervisor(#[from] crate::supervisor::SupervisorError),
}

/// Type alias for menu command execution results.
///
/// Commands return a success message to display, or a [`MenuError`]
/// describing what went wrong.
pub type CommandResult = Result<String, MenuError>;

/// Metadata for a single menu entry.
///
/// The registry renders the menu from this metadata; the entry number comes
/// from registration order.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// Short command name (e.g., "play", "stop").
    pub name: String,

    /// Line shown in the menu for this entry.
    pub description: String,

    /// Hint for the arguments the entry takes (e.g., "<number>"), if any.
    pub args_hint: Option<String>,
}

/// Trait defining the interface for all menu commands.
///
/// Commands receive their dependencies through their constructors and are
/// responsible for their own argument validation.
#[async_trait]
pub trait MenuCommand: Send + Sync {
    /// Executes the command with the arguments that followed the menu number.
    ///
    /// # Errors
    ///
    /// Returns `MenuError` for any execution failure; the controller reports
    /// it and keeps the loop running.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the metadata for this menu entry.
    fn metadata(&self) -> CommandMetadata;
}
