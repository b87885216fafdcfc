use std::path::PathBuf;

use tracing::debug;

use super::{PlayerError, PlayerKind};

/// Capability to resolve an executable name on the current search path.
///
/// Abstracted so [`locate`] can be tested deterministically without real
/// player binaries installed.
pub trait ExecutableResolver {
    /// Returns the full path of `name` if it resolves to an executable.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<F> ExecutableResolver for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Resolver backed by the system search path.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResolver;

impl ExecutableResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// A player binary resolved on this host.
///
/// Immutable once resolved; the whole run uses the same player.
#[derive(Debug, Clone)]
pub struct LocatedPlayer {
    /// Which of the supported players was found.
    pub kind: PlayerKind,

    /// Resolved executable path.
    pub path: PathBuf,
}

/// Probes for the first available player binary.
///
/// A preferred player, when given, is probed before the fixed
/// [`PlayerKind::PRIORITY`] list. No side effects; the probe only asks the
/// resolver whether each candidate exists.
///
/// # Errors
/// Returns [`PlayerError::NoPlayerAvailable`] when no candidate resolves.
/// This is fatal for the program; there is no degraded mode.
pub fn locate<R: ExecutableResolver>(
    resolver: &R,
    preferred: Option<PlayerKind>,
) -> Result<LocatedPlayer, PlayerError> {
    for kind in preferred.into_iter().chain(PlayerKind::PRIORITY) {
        if let Some(path) = resolver.resolve(kind.binary_name()) {
            debug!(player = %kind, path = %path.display(), "resolved player binary");
            return Ok(LocatedPlayer { kind, path });
        }
    }

    Err(PlayerError::NoPlayerAvailable)
}
