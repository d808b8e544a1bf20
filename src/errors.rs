// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangewatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to run command: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command exited: {}", describe_exit(.code, .signal))]
    ChildExited {
        code: Option<i32>,
        signal: Option<i32>,
    },

    #[error("failed to signal child: {0}")]
    Signal(#[from] nix::errno::Errno),
}

fn describe_exit(code: &Option<i32>, signal: &Option<i32>) -> String {
    match (*code, *signal) {
        (Some(code), _) => format!("exit code {code}"),
        (None, Some(sig)) => format!("terminated by signal {sig}"),
        (None, None) => "unknown exit status".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ChangewatchError>;
