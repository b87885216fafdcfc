//! OS process primitives behind a narrow, mockable interface.

use std::{
    fs, io,
    path::Path,
    process::{Command, Stdio},
};

/// Process identifier used across the supervisor.
pub type Pid = i32;

/// The primitive OS operations the supervisor depends on.
///
/// Kept narrow so the supervisor state machine can be driven by a fake
/// backend in tests: spawn a detached process, probe and signal an existing
/// one, and enumerate its direct children.
pub trait ProcessBackend: Send + Sync {
    /// Spawns `program` with `args` in its own process group, detached from
    /// the calling terminal, with stdio discarded.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the process cannot be spawned.
    fn spawn_detached(&self, program: &Path, args: &[String]) -> io::Result<Pid>;

    /// Non-destructive liveness probe for `pid`.
    fn is_alive(&self, pid: Pid) -> bool;

    /// Sends a termination signal to `pid`.
    ///
    /// # Errors
    /// Returns the underlying OS error if the signal cannot be delivered.
    fn terminate(&self, pid: Pid) -> io::Result<()>;

    /// Direct children of `pid`, best-effort.
    fn children(&self, pid: Pid) -> Vec<Pid>;

    /// Human-readable command line of `pid`, best-effort.
    fn describe(&self, pid: Pid) -> Option<String>;
}

/// Backend over the host process table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessBackend;

impl ProcessBackend for SystemProcessBackend {
    fn spawn_detached(&self, program: &Path, args: &[String]) -> io::Result<Pid> {
        use std::os::unix::process::CommandExt;

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()?;

        Ok(child.id() as Pid)
    }

    #[allow(unsafe_code)]
    fn is_alive(&self, pid: Pid) -> bool {
        // Reap the child first if it already exited, so its zombie entry
        // does not answer the signal-0 probe.
        unsafe {
            let mut status = 0;
            if libc::waitpid(pid, &mut status, libc::WNOHANG) == pid {
                return false;
            }

            libc::kill(pid, 0) == 0
        }
    }

    #[allow(unsafe_code)]
    fn terminate(&self, pid: Pid) -> io::Result<()> {
        let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
        if rc == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn children(&self, pid: Pid) -> Vec<Pid> {
        let path = format!("/proc/{pid}/task/{pid}/children");

        match fs::read_to_string(path) {
            Ok(listing) => listing
                .split_whitespace()
                .filter_map(|token| token.parse().ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn describe(&self, pid: Pid) -> Option<String> {
        let raw = fs::read(format!("/proc/{pid}/cmdline")).ok()?;

        let command_line = raw
            .split(|byte| *byte == 0)
            .filter(|part| !part.is_empty())
            .map(|part| String::from_utf8_lossy(part).into_owned())
            .collect::<Vec<_>>()
            .join(" ");

        if command_line.is_empty() {
            None
        } else {
            Some(command_line)
        }
    }
}
