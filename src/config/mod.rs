// src/config/mod.rs

//! Configuration loading and validation for changewatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an optional config file from disk (`loader.rs`).
//! - Merge CLI values over it and enforce the invariants the supervisor
//!   needs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_resolve, load_from_path};
pub use model::{
    ConfigFile, ConfigOverrides, MonitorConfig, MonitorSection, DEFAULT_KILL_AFTER_SECS,
    DEFAULT_SLEEP_SECS,
};
pub use validate::{resolve, validate_config};
