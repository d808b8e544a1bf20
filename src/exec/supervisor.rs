// src/exec/supervisor.rs

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::{info, warn};

use crate::errors::{ChangewatchError, Result};
use crate::exec::signal::ChildHandle;

/// The one running child process.
///
/// This is the sole owner of the OS process; everyone else gets a
/// [`ChildHandle`] via [`SupervisedChild::handle`].
#[derive(Debug)]
pub struct SupervisedChild {
    child: Child,
    handle: ChildHandle,
    command: String,
}

/// Launch `command[0]` with the remaining elements as arguments.
///
/// The child shares the supervisor's stdin, stdout and stderr.
pub fn start(command: &[String]) -> Result<SupervisedChild> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| ChangewatchError::Config("no command provided".to_string()))?;
    let command_line = command.join(" ");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ChangewatchError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    // A freshly spawned child always has a PID until it is polled to exit.
    let pid = child.id().ok_or_else(|| ChangewatchError::Spawn {
        command: command_line.clone(),
        source: std::io::Error::other("child exited before its PID was read"),
    })?;

    info!(pid, command = %command_line, "command running");

    Ok(SupervisedChild {
        child,
        handle: ChildHandle::new(pid),
        command: command_line,
    })
}

impl SupervisedChild {
    pub fn handle(&self) -> ChildHandle {
        self.handle
    }

    /// Block until the child exits.
    ///
    /// Any exit other than a clean zero status is an error; the supervisor
    /// never relaunches the child itself.
    pub async fn wait(mut self) -> Result<ExitStatus> {
        let status = self.child.wait().await?;

        if status.success() {
            info!(pid = self.handle.pid(), command = %self.command, "command exited cleanly");
            return Ok(status);
        }

        warn!(
            pid = self.handle.pid(),
            command = %self.command,
            exit_code = ?status.code(),
            signal = ?status.signal(),
            "command exited abnormally"
        );
        Err(ChangewatchError::ChildExited {
            code: status.code(),
            signal: status.signal(),
        })
    }
}
