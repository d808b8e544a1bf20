// src/exec/relay.rs

//! Forward signals received by the supervisor to the child.
//!
//! Listening is split from forwarding: [`listen_for_signals`] turns OS signals
//! into a channel of [`Signal`] values, and [`relay_signals`] drains that
//! channel into a [`SignalTarget`]. Tests drive the second half directly.

use nix::sys::signal::Signal;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::exec::signal::SignalTarget;

/// Signals forwarded verbatim to the child. SIGKILL cannot be caught, so it
/// is not in the list.
pub const RELAYED_SIGNALS: [Signal; 3] = [Signal::SIGINT, Signal::SIGHUP, Signal::SIGTERM];

/// Install handlers for every signal in [`RELAYED_SIGNALS`].
///
/// Must be called from within a Tokio runtime. Once installed, these signals
/// no longer terminate the supervisor itself; they are queued on the returned
/// channel until someone forwards them.
pub fn listen_for_signals() -> Result<mpsc::UnboundedReceiver<Signal>> {
    let (tx, rx) = mpsc::unbounded_channel();

    for sig in RELAYED_SIGNALS {
        let mut stream = signal(SignalKind::from_raw(sig as i32))?;
        let tx = tx.clone();
        tokio::spawn(async move {
            while stream.recv().await.is_some() {
                if tx.send(sig).is_err() {
                    break;
                }
            }
            debug!(signal = %sig, "signal listener ended");
        });
    }

    Ok(rx)
}

/// Hand the started child to the relay. Returns `false` (and logs) if the
/// relay has already gone away.
pub fn publish_child_handle<T: SignalTarget>(tx: oneshot::Sender<T>, target: T) -> bool {
    match tx.send(target) {
        Ok(()) => true,
        Err(_) => {
            debug!("signal relay already stopped; child handle not published");
            false
        }
    }
}

/// Forward each incoming signal to the child, once per delivery.
///
/// The target arrives through `target_rx` once the child has been started;
/// signals received before then stay queued. Returns when the incoming
/// channel closes or the target is never published.
pub async fn relay_signals<T: SignalTarget>(
    mut incoming: mpsc::UnboundedReceiver<Signal>,
    target_rx: oneshot::Receiver<T>,
) {
    let target = match target_rx.await {
        Ok(target) => target,
        Err(_) => {
            debug!("child never started; signal relay exiting");
            return;
        }
    };

    while let Some(sig) = incoming.recv().await {
        info!(signal = %sig, "signal received");
        if let Err(e) = target.send_signal(sig) {
            error!(signal = %sig, error = %e, "failed to forward signal to child");
        }
    }

    debug!("signal relay finished (channel closed)");
}
