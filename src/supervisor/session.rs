use super::backend::Pid;

/// An active playback session, returned by a successful start.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    /// Process identifier of the detached player.
    pub pid: Pid,

    /// Arguments the player was launched with, kept for display.
    pub args: Vec<String>,
}

/// Session status reported by a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No recorded player process, or the recorded one is no longer alive.
    Idle,

    /// The recorded player process is alive.
    Running {
        /// Process identifier read from the state slot.
        pid: Pid,

        /// Best-effort command-line description; absence is not an error.
        description: Option<String>,
    },
}

/// Outcome of a stop request.
///
/// Stopping with nothing running is informational, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// No live player process was recorded.
    NothingRunning,

    /// The recorded player was signalled and the state slot cleared.
    Stopped {
        /// Process identifier that was signalled.
        pid: Pid,
    },
}
