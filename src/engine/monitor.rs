// src/engine/monitor.rs

use std::time::Duration;

use nix::sys::signal::Signal;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task::block_in_place;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use crate::engine::escalator::{EscalationAction, Escalator};
use crate::exec::SignalTarget;
use crate::fs::FileSystem;
use crate::watch::ChangeDetector;

/// Anything that can answer "did the watched files change?" once per tick.
pub trait ChangeCheck: Send {
    fn changed(&mut self) -> bool;
}

impl<F: FileSystem> ChangeCheck for ChangeDetector<F> {
    fn changed(&mut self) -> bool {
        self.check_all()
    }
}

/// Timing for the poll loop.
#[derive(Debug, Clone, Copy)]
pub struct MonitorOptions {
    pub poll_interval: Duration,
    pub term_timeout: Duration,
}

/// Why the monitor loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorOutcome {
    /// SIGKILL was sent; the supervisor should exit now.
    ForcedKill,
}

/// Poll for changes and escalate SIGTERM -> SIGKILL.
///
/// Each tick sleeps `poll_interval` first. While idle the detector is run;
/// once SIGTERM has gone out the detector is never consulted again and only
/// the timeout is checked. The loop only returns after SIGKILL; a child that
/// exits by itself is noticed by whoever owns it, not here.
pub async fn run_monitor<C, T>(mut detector: C, target: T, options: MonitorOptions) -> MonitorOutcome
where
    C: ChangeCheck,
    T: SignalTarget,
{
    let mut escalator = Escalator::new(options.term_timeout);
    debug!(?options, "monitor loop started");

    loop {
        sleep(options.poll_interval).await;

        let action = if escalator.is_idle() {
            if run_check(&mut detector) {
                escalator.on_change(Instant::now())
            } else {
                EscalationAction::Nothing
            }
        } else {
            escalator.on_tick(Instant::now())
        };

        match action {
            EscalationAction::Nothing => {}
            EscalationAction::SendTerm => {
                info!(
                    timeout_secs = options.term_timeout.as_secs_f64(),
                    "sending SIGTERM to command"
                );
                if let Err(e) = target.send_signal(Signal::SIGTERM) {
                    error!(error = %e, "failed to send SIGTERM");
                }
            }
            EscalationAction::SendKill => {
                warn!("need to forcefully kill the process");
                if let Err(e) = target.send_signal(Signal::SIGKILL) {
                    error!(error = %e, "failed to send SIGKILL");
                }
                return MonitorOutcome::ForcedKill;
            }
        }
    }
}

/// Run one detection pass. Hashing is blocking file IO, so on the
/// multi-threaded runtime the worker hands its other tasks off first.
/// `block_in_place` is unavailable on the current-thread runtime, where the
/// check simply runs inline.
fn run_check<C: ChangeCheck>(detector: &mut C) -> bool {
    match Handle::current().runtime_flavor() {
        RuntimeFlavor::MultiThread => block_in_place(|| detector.changed()),
        _ => detector.changed(),
    }
}
