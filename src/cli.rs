// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ConfigOverrides;

/// Command-line arguments for `changewatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "changewatch",
    version,
    about = "Run a command and stop it when any of the given files change.",
    override_usage = "changewatch [OPTIONS] <FILE>... -- <COMMAND>...",
    long_about = None
)]
pub struct CliArgs {
    /// Files to monitor for changes.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Command to run, given after `--`.
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,

    /// Number of seconds to sleep between checking for file changes.
    ///
    /// Default: 60.
    #[arg(long, value_name = "SECS")]
    pub sleep: Option<u64>,

    /// Number of seconds to wait after SIGTERM before sending SIGKILL.
    ///
    /// Default: 300.
    #[arg(long, value_name = "SECS")]
    pub kill_after: Option<u64>,

    /// Optional TOML config file with a `[monitor]` section.
    ///
    /// Command-line values take precedence over the file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CHANGEWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print the resolved configuration, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            paths: self.files.clone(),
            command: self.command.clone(),
            sleep: self.sleep,
            kill_after: self.kill_after,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
