// src/engine/escalator.rs

//! Pure termination state machine.
//!
//! No channels, no timers, no signals: the caller passes in "now" and acts on
//! the returned [`EscalationAction`]. The async shell lives in
//! [`crate::engine::monitor`].

use std::time::Duration;

use tokio::time::Instant;

/// Where the escalation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationState {
    Idle,
    TermSent { at: Instant },
    Killed,
}

/// What the caller should do after feeding the escalator an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationAction {
    Nothing,
    SendTerm,
    SendKill,
}

#[derive(Debug)]
pub struct Escalator {
    state: EscalationState,
    timeout: Duration,
}

impl Escalator {
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: EscalationState::Idle,
            timeout,
        }
    }

    pub fn state(&self) -> EscalationState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == EscalationState::Idle
    }

    /// A change was detected. Latches into `TermSent` the first time; later
    /// calls are ignored.
    pub fn on_change(&mut self, now: Instant) -> EscalationAction {
        match self.state {
            EscalationState::Idle => {
                self.state = EscalationState::TermSent { at: now };
                EscalationAction::SendTerm
            }
            EscalationState::TermSent { .. } | EscalationState::Killed => EscalationAction::Nothing,
        }
    }

    /// A poll tick passed. Escalates to a kill once the timeout has elapsed
    /// since the terminate signal.
    pub fn on_tick(&mut self, now: Instant) -> EscalationAction {
        match self.state {
            EscalationState::TermSent { at } if now.duration_since(at) >= self.timeout => {
                self.state = EscalationState::Killed;
                EscalationAction::SendKill
            }
            _ => EscalationAction::Nothing,
        }
    }
}
