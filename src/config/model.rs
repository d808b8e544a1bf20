// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SLEEP_SECS: u64 = 60;
pub const DEFAULT_KILL_AFTER_SECS: u64 = 300;

/// Raw TOML file as written by the user.
///
/// ```toml
/// [monitor]
/// paths = ["config/app.toml"]
/// command = ["bin/app", "--serve"]
/// sleep = 30
/// kill_after = 120
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub monitor: MonitorSection,
}

/// `[monitor]`: every key is optional; the CLI can fill the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    #[serde(default)]
    pub command: Vec<String>,

    /// Seconds between polls.
    pub sleep: Option<u64>,

    /// Seconds between SIGTERM and SIGKILL.
    pub kill_after: Option<u64>,
}

/// Values supplied on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub paths: Vec<PathBuf>,
    pub command: Vec<String>,
    pub sleep: Option<u64>,
    pub kill_after: Option<u64>,
}

/// Validated, immutable configuration for one supervisor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub paths: Vec<PathBuf>,
    pub command: Vec<String>,
    pub poll_interval: Duration,
    pub term_timeout: Duration,
}
