// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{
    ConfigFile, ConfigOverrides, MonitorConfig, DEFAULT_KILL_AFTER_SECS, DEFAULT_SLEEP_SECS,
};
use crate::errors::{ChangewatchError, Result};

const USAGE_HINT: &str =
    "must provide a list of files and a command (e.g. changewatch file1 file2 -- command/to/run)";

/// Merge file values with CLI overrides and check the invariants the core
/// relies on.
///
/// Precedence per field: CLI, then file, then built-in default. Lists from the
/// CLI replace the file's lists rather than extending them.
pub fn resolve(file: Option<ConfigFile>, overrides: ConfigOverrides) -> Result<MonitorConfig> {
    let section = file.map(|f| f.monitor).unwrap_or_default();

    let paths = if overrides.paths.is_empty() {
        section.paths
    } else {
        overrides.paths
    };
    let command = if overrides.command.is_empty() {
        section.command
    } else {
        overrides.command
    };
    let sleep = overrides
        .sleep
        .or(section.sleep)
        .unwrap_or(DEFAULT_SLEEP_SECS);
    let kill_after = overrides
        .kill_after
        .or(section.kill_after)
        .unwrap_or(DEFAULT_KILL_AFTER_SECS);

    let cfg = MonitorConfig {
        paths,
        command,
        poll_interval: Duration::from_secs(sleep),
        term_timeout: Duration::from_secs(kill_after),
    };
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn validate_config(cfg: &MonitorConfig) -> Result<()> {
    if cfg.paths.is_empty() || cfg.command.is_empty() {
        return Err(ChangewatchError::Config(USAGE_HINT.to_string()));
    }

    if cfg.command[0].trim().is_empty() {
        return Err(ChangewatchError::Config(
            "command executable must not be empty".to_string(),
        ));
    }

    if cfg.poll_interval.is_zero() {
        return Err(ChangewatchError::Config(
            "sleep must be >= 1 second (got 0)".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::MonitorSection;
    use std::path::PathBuf;

    fn overrides(paths: &[&str], command: &[&str]) -> ConfigOverrides {
        ConfigOverrides {
            paths: paths.iter().map(PathBuf::from).collect(),
            command: command.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_apply_when_nothing_given() {
        let cfg = resolve(None, overrides(&["a.txt"], &["sleep", "100"])).unwrap();
        assert_eq!(cfg.poll_interval, Duration::from_secs(60));
        assert_eq!(cfg.term_timeout, Duration::from_secs(300));
    }

    #[test]
    fn cli_wins_over_file() {
        let file = ConfigFile {
            monitor: MonitorSection {
                paths: vec![PathBuf::from("from-file.txt")],
                command: vec!["file-cmd".to_string()],
                sleep: Some(10),
                kill_after: Some(20),
            },
        };
        let mut ov = overrides(&["cli.txt"], &[]);
        ov.sleep = Some(2);

        let cfg = resolve(Some(file), ov).unwrap();
        assert_eq!(cfg.paths, vec![PathBuf::from("cli.txt")]);
        assert_eq!(cfg.command, vec!["file-cmd".to_string()]);
        assert_eq!(cfg.poll_interval, Duration::from_secs(2));
        assert_eq!(cfg.term_timeout, Duration::from_secs(20));
    }

    #[test]
    fn empty_paths_or_command_is_fatal() {
        for ov in [overrides(&[], &["cmd"]), overrides(&["a"], &[])] {
            match resolve(None, ov) {
                Err(ChangewatchError::Config(msg)) => {
                    assert!(msg.contains("must provide a list of files and a command"))
                }
                other => panic!("expected Config error, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let mut ov = overrides(&["a"], &["cmd"]);
        ov.sleep = Some(0);
        assert!(matches!(resolve(None, ov), Err(ChangewatchError::Config(_))));
    }

    #[test]
    fn zero_kill_after_is_allowed() {
        let mut ov = overrides(&["a"], &["cmd"]);
        ov.kill_after = Some(0);
        let cfg = resolve(None, ov).unwrap();
        assert!(cfg.term_timeout.is_zero());
    }
}
