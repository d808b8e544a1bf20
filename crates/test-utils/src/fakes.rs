use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use changewatch::engine::ChangeCheck;
use changewatch::errors::Result;
use changewatch::exec::SignalTarget;
use nix::sys::signal::Signal;
use tokio::time::Instant;

/// A signal target that records every signal with the (Tokio) time it was
/// sent. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    sent: Arc<Mutex<Vec<(Signal, Instant)>>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(Signal, Instant)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.sent().into_iter().map(|(sig, _)| sig).collect()
    }
}

impl SignalTarget for RecordingTarget {
    fn send_signal(&self, signal: Signal) -> Result<()> {
        self.sent.lock().unwrap().push((signal, Instant::now()));
        Ok(())
    }
}

/// A change source that replays a fixed script of answers, then keeps
/// answering `false`. Counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChanges {
    script: Arc<Mutex<VecDeque<bool>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedChanges {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Report a change on the `n`th check (1-based), nothing otherwise.
    pub fn change_on_tick(n: usize) -> Self {
        Self::new((1..=n).map(|i| i == n))
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ChangeCheck for ScriptedChanges {
    fn changed(&mut self) -> bool {
        *self.calls.lock().unwrap() += 1;
        self.script.lock().unwrap().pop_front().unwrap_or(false)
    }
}
