// src/engine/mod.rs

//! Change-driven termination.
//!
//! - [`escalator`]: the pure `Idle -> TermSent -> Killed` state machine.
//! - [`monitor`]: the poll loop that owns the detector and the escalator and
//!   turns escalator actions into signals.

pub mod escalator;
pub mod monitor;

pub use escalator::{EscalationAction, EscalationState, Escalator};
pub use monitor::{run_monitor, ChangeCheck, MonitorOptions, MonitorOutcome};
