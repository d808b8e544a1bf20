// tests/escalation_timing.rs

use std::time::Duration;

use nix::sys::signal::Signal;
use tokio::time::{timeout, Instant};

use changewatch::engine::{run_monitor, MonitorOptions, MonitorOutcome};
use changewatch_test_utils::fakes::{RecordingTarget, ScriptedChanges};
use changewatch_test_utils::init_tracing;

fn options(poll_secs: u64, timeout_secs: u64) -> MonitorOptions {
    MonitorOptions {
        poll_interval: Duration::from_secs(poll_secs),
        term_timeout: Duration::from_secs(timeout_secs),
    }
}

#[tokio::test(start_paused = true)]
async fn term_on_first_tick_then_kill_within_one_tick_of_timeout() {
    init_tracing();
    let target = RecordingTarget::new();
    let changes = ScriptedChanges::change_on_tick(1);
    let start = Instant::now();

    let outcome = run_monitor(changes.clone(), target.clone(), options(1, 5)).await;
    assert_eq!(outcome, MonitorOutcome::ForcedKill);

    let sent = target.sent();
    assert_eq!(sent.len(), 2);
    let (term, term_at) = sent[0];
    let (kill, kill_at) = sent[1];
    assert_eq!(term, Signal::SIGTERM);
    assert_eq!(kill, Signal::SIGKILL);

    assert!(term_at.duration_since(start) <= Duration::from_secs(1));
    let gap = kill_at.duration_since(term_at);
    assert!(gap >= Duration::from_secs(5), "kill too early: {gap:?}");
    assert!(gap <= Duration::from_secs(6), "kill too late: {gap:?}");

    // The detector is not consulted again once SIGTERM is out.
    assert_eq!(changes.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn term_follows_the_tick_that_saw_the_change() {
    let target = RecordingTarget::new();
    let changes = ScriptedChanges::change_on_tick(3);
    let start = Instant::now();

    run_monitor(changes.clone(), target.clone(), options(1, 2)).await;

    let sent = target.sent();
    assert_eq!(target.signals(), vec![Signal::SIGTERM, Signal::SIGKILL]);
    let term_after = sent[0].1.duration_since(start);
    assert!(term_after >= Duration::from_secs(3) && term_after < Duration::from_secs(4));
    assert_eq!(changes.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn no_change_means_no_signals_ever() {
    let target = RecordingTarget::new();
    let changes = ScriptedChanges::new([]);

    let result = timeout(
        Duration::from_secs(3630),
        run_monitor(changes.clone(), target.clone(), options(60, 300)),
    )
    .await;

    assert!(result.is_err(), "monitor should still be running");
    assert!(target.sent().is_empty());
    assert_eq!(changes.calls(), 60);
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_kills_on_the_tick_after_term() {
    let target = RecordingTarget::new();
    let changes = ScriptedChanges::change_on_tick(1);

    run_monitor(changes, target.clone(), options(1, 0)).await;

    let sent = target.sent();
    assert_eq!(target.signals(), vec![Signal::SIGTERM, Signal::SIGKILL]);
    let gap = sent[1].1.duration_since(sent[0].1);
    assert!(gap >= Duration::from_secs(1) && gap < Duration::from_secs(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn escalates_on_the_multi_threaded_runtime() {
    let target = RecordingTarget::new();
    let changes = ScriptedChanges::change_on_tick(2);
    let options = MonitorOptions {
        poll_interval: Duration::from_millis(20),
        term_timeout: Duration::from_millis(60),
    };

    let outcome = timeout(
        Duration::from_secs(10),
        run_monitor(changes.clone(), target.clone(), options),
    )
    .await
    .expect("monitor did not finish");

    assert_eq!(outcome, MonitorOutcome::ForcedKill);
    assert_eq!(target.signals(), vec![Signal::SIGTERM, Signal::SIGKILL]);
    assert_eq!(changes.calls(), 2);
}
