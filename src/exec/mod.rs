// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`supervisor`] launches the child with inherited stdio and waits on it.
//! - [`signal`] is how everything else talks to the child: a copyable
//!   [`ChildHandle`] behind the [`SignalTarget`] trait.
//! - [`relay`] forwards SIGINT/SIGHUP/SIGTERM received by the supervisor.

pub mod relay;
pub mod signal;
pub mod supervisor;

pub use relay::{listen_for_signals, publish_child_handle, relay_signals, RELAYED_SIGNALS};
pub use signal::{ChildHandle, SignalTarget};
pub use supervisor::{start, SupervisedChild};
