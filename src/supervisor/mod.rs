//! Lifecycle management for the detached player process.
//!
//! The supervisor owns at most one active player. Its only memory is the
//! persisted state slot - a plain-text PID file at a well-known location -
//! so a fresh supervisor instance after a restart can still query or stop a
//! player launched by an earlier one. Every operation re-reads the slot;
//! nothing is cached in memory.

mod backend;
mod error;
mod session;

pub use backend::{Pid, ProcessBackend, SystemProcessBackend};
pub use error::SupervisorError;
pub use session::{PlaybackSession, SessionStatus, StopOutcome};

use std::{
    fs, io,
    path::PathBuf,
    time::Duration,
};

use tracing::{info, warn};

use crate::{config::ConfigPaths, player::LaunchSpec};

/// How long to wait after signalling or spawning for the process table to
/// settle. Immediate launch failures surface within this window; detection
/// is best-effort, not guaranteed.
const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Supervises the single detached player process.
///
/// At most one session is active per state slot; starting a new one first
/// performs the stop transition for any live prior session.
pub struct PlaybackSupervisor {
    backend: Box<dyn ProcessBackend>,
    state_path: PathBuf,
}

impl PlaybackSupervisor {
    /// Creates a supervisor over the given backend and state slot location.
    pub fn new(backend: Box<dyn ProcessBackend>, state_path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            state_path: state_path.into(),
        }
    }

    /// Supervisor over the host process table with the well-known state file.
    ///
    /// # Errors
    /// Returns error if the state file location cannot be resolved.
    pub fn with_default_paths() -> io::Result<Self> {
        Ok(Self::new(
            Box::new(SystemProcessBackend),
            ConfigPaths::state_file()?,
        ))
    }

    /// Starts a new playback session from the launch spec.
    ///
    /// Any live prior session is stopped first. The player is spawned
    /// detached in its own process group, its PID is persisted to the state
    /// slot, and a short settle delay follows so an immediately failing
    /// launch is surfaced instead of recorded.
    ///
    /// # Errors
    /// Returns [`SupervisorError::SpawnFailed`] if the spawn itself fails and
    /// [`SupervisorError::LaunchFailure`] if the player dies within the
    /// settle window; in both cases the state slot is left `Idle`.
    pub async fn start(&self, spec: &LaunchSpec) -> Result<PlaybackSession, SupervisorError> {
        if let Some(pid) = self.recorded_pid() {
            if self.backend.is_alive(pid) {
                info!(pid, "stopping previous player before starting a new one");
                self.stop().await?;
            }
        }

        let pid = self
            .backend
            .spawn_detached(&spec.program, &spec.args)
            .map_err(SupervisorError::SpawnFailed)?;

        self.write_slot(pid)?;

        tokio::time::sleep(SETTLE_DELAY).await;

        if !self.backend.is_alive(pid) {
            self.clear_slot();
            return Err(SupervisorError::LaunchFailure);
        }

        info!(pid, program = %spec.program.display(), "player started");

        Ok(PlaybackSession {
            pid,
            args: spec.args.clone(),
        })
    }

    /// Stops the recorded player process, if any.
    ///
    /// The player's direct children are snapshotted before it is signalled
    /// (they disappear from the process table with it), then signalled
    /// themselves after a settle delay - best-effort cleanup of a player's
    /// worker subprocesses. A dead or absent recorded PID is a no-op that
    /// reports [`StopOutcome::NothingRunning`]; calling stop twice in a row
    /// is safe.
    ///
    /// # Errors
    /// Returns error if the state slot cannot be accessed.
    pub async fn stop(&self) -> Result<StopOutcome, SupervisorError> {
        let Some(pid) = self.recorded_pid() else {
            return Ok(StopOutcome::NothingRunning);
        };

        if !self.backend.is_alive(pid) {
            self.clear_slot();
            return Ok(StopOutcome::NothingRunning);
        }

        let children = self.backend.children(pid);

        if let Err(error) = self.backend.terminate(pid) {
            warn!(pid, %error, "failed to signal player process");
        }

        tokio::time::sleep(SETTLE_DELAY).await;

        for child in children {
            if self.backend.is_alive(child) {
                if let Err(error) = self.backend.terminate(child) {
                    warn!(pid = child, %error, "failed to signal player child process");
                }
            }
        }

        self.clear_slot();
        info!(pid, "player stopped");

        Ok(StopOutcome::Stopped { pid })
    }

    /// Reports the current session state without touching the slot.
    ///
    /// A recorded PID that is no longer alive reads as [`SessionStatus::Idle`];
    /// the stale slot is cleared by the next start or stop, not here.
    pub fn query(&self) -> SessionStatus {
        let Some(pid) = self.recorded_pid() else {
            return SessionStatus::Idle;
        };

        if !self.backend.is_alive(pid) {
            return SessionStatus::Idle;
        }

        SessionStatus::Running {
            pid,
            description: self.backend.describe(pid),
        }
    }

    fn recorded_pid(&self) -> Option<Pid> {
        let content = fs::read_to_string(&self.state_path).ok()?;

        match content.trim().parse() {
            Ok(pid) => Some(pid),
            Err(_) => {
                warn!(path = ?self.state_path, "ignoring unparseable playback state file");
                None
            }
        }
    }

    fn write_slot(&self, pid: Pid) -> Result<(), SupervisorError> {
        let to_state_error = |source| SupervisorError::StateFile {
            path: self.state_path.clone(),
            source,
        };

        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent).map_err(to_state_error)?;
        }

        fs::write(&self.state_path, format!("{pid}\n")).map_err(to_state_error)
    }

    fn clear_slot(&self) {
        if let Err(error) = fs::remove_file(&self.state_path) {
            if error.kind() != io::ErrorKind::NotFound {
                warn!(path = ?self.state_path, %error, "failed to clear playback state file");
            }
        }
    }
}
