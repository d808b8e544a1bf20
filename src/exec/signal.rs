// src/exec/signal.rs

//! Sending POSIX signals to the supervised child.
//!
//! The escalator and the relay never own the child; they only hold a
//! [`ChildHandle`] (or a test double) through the [`SignalTarget`] trait.

use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tracing::debug;

use crate::errors::Result;

/// Something that signals can be delivered to.
///
/// Production code uses [`ChildHandle`]; tests provide implementations that
/// just record what was sent and when.
pub trait SignalTarget: Send + Sync {
    fn send_signal(&self, signal: Signal) -> Result<()>;
}

/// Non-owning, copyable reference to the running child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildHandle {
    pid: Pid,
}

impl ChildHandle {
    pub fn new(pid: u32) -> Self {
        Self {
            pid: Pid::from_raw(pid as i32),
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid.as_raw() as u32
    }
}

impl SignalTarget for ChildHandle {
    fn send_signal(&self, sig: Signal) -> Result<()> {
        match signal::kill(self.pid, sig) {
            Ok(()) => {
                debug!(pid = %self.pid, signal = %sig, "signal delivered");
                Ok(())
            }
            // Already exited; the supervisor's wait will notice.
            Err(Errno::ESRCH) => {
                debug!(pid = %self.pid, signal = %sig, "child already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
