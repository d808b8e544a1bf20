// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod watch;

use anyhow::Result;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_resolve, MonitorConfig};
use crate::engine::{run_monitor, MonitorOptions, MonitorOutcome};
use crate::exec::{listen_for_signals, publish_child_handle, relay_signals, ChildHandle};
use crate::watch::ChangeDetector;

/// How a supervisor run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorExit {
    /// The child exited on its own with status 0.
    ChildExited,
    /// The escalator had to SIGKILL the child.
    ForcedKill,
    /// `--dry-run`: nothing was started.
    DryRun,
}

/// High-level entry point used by `main.rs`.
///
/// Resolves the configuration and hands it to [`supervise`].
pub async fn run(args: CliArgs) -> Result<SupervisorExit> {
    let cfg = load_and_resolve(args.config.as_deref(), args.overrides())?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(SupervisorExit::DryRun);
    }

    supervise(cfg).await
}

/// Start the child and keep it under watch until the program should end.
///
/// This is the lifetime owner: whichever comes first of the child exiting or
/// the monitor sending SIGKILL decides how the whole supervisor ends. The
/// other activities are torn down when this returns.
pub async fn supervise(cfg: MonitorConfig) -> Result<SupervisorExit> {
    info!(command = %cfg.command.join(" "), "running command");
    for path in &cfg.paths {
        info!(path = ?path, "monitoring file");
    }

    // Register before spawning so a signal arriving mid-spawn is queued, not lost.
    let signals = listen_for_signals()?;
    let (handle_tx, handle_rx) = oneshot::channel::<ChildHandle>();
    let relay = tokio::spawn(relay_signals(signals, handle_rx));

    let child = exec::start(&cfg.command)?;
    let handle = child.handle();
    publish_child_handle(handle_tx, handle);

    let detector = ChangeDetector::new(cfg.paths.clone());
    let options = MonitorOptions {
        poll_interval: cfg.poll_interval,
        term_timeout: cfg.term_timeout,
    };
    let mut monitor = tokio::spawn(run_monitor(detector, handle, options));

    // Monitor first: right after SIGKILL both branches can be ready at once.
    let result: Result<SupervisorExit> = tokio::select! {
        biased;

        outcome = &mut monitor => match outcome {
            Ok(MonitorOutcome::ForcedKill) => Ok(SupervisorExit::ForcedKill),
            Err(e) => Err(e.into()),
        },
        status = child.wait() => match status {
            Ok(_) => Ok(SupervisorExit::ChildExited),
            Err(e) => Err(e.into()),
        },
    };

    monitor.abort();
    relay.abort();
    debug!(?result, "supervisor finished");
    result
}

/// Simple dry-run output: print what would be watched and run.
fn print_dry_run(cfg: &MonitorConfig) {
    println!("changewatch dry-run");
    println!("  sleep = {}s", cfg.poll_interval.as_secs());
    println!("  kill_after = {}s", cfg.term_timeout.as_secs());
    println!("  command: {}", cfg.command.join(" "));
    println!();

    println!("files ({}):", cfg.paths.len());
    for path in &cfg.paths {
        println!("  - {}", path.display());
    }

    debug!("dry-run complete (no execution)");
}
