// tests/config_file.rs

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::NamedTempFile;

use changewatch::cli::CliArgs;
use changewatch::config::{load_and_resolve, load_from_path, ConfigOverrides};
use changewatch::errors::ChangewatchError;
use clap::Parser;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_monitor_section_is_loaded() {
    let file = write_config(
        r#"
[monitor]
paths = ["config/app.toml", "bin/app"]
command = ["bin/app", "--serve"]
sleep = 30
kill_after = 120
"#,
    );

    let cfg = load_and_resolve(Some(file.path()), ConfigOverrides::default()).unwrap();
    assert_eq!(
        cfg.paths,
        vec![PathBuf::from("config/app.toml"), PathBuf::from("bin/app")]
    );
    assert_eq!(cfg.command, vec!["bin/app".to_string(), "--serve".to_string()]);
    assert_eq!(cfg.poll_interval, Duration::from_secs(30));
    assert_eq!(cfg.term_timeout, Duration::from_secs(120));
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config(
        r#"
[monitor]
paths = ["a"]
comand = ["typo"]
"#,
    );

    match load_from_path(file.path()) {
        Err(ChangewatchError::Toml(e)) => assert!(e.to_string().contains("comand")),
        other => panic!("expected Toml error, got {other:?}"),
    }
}

#[test]
fn missing_config_file_is_a_config_error() {
    let result = load_from_path("/definitely/not/here/changewatch.toml");
    assert!(matches!(result, Err(ChangewatchError::Config(_))));
}

#[test]
fn cli_args_fill_in_and_override_file_values() {
    let file = write_config(
        r#"
[monitor]
paths = ["from-file.txt"]
kill_after = 10
"#,
    );

    let args = CliArgs::try_parse_from([
        "changewatch",
        "--sleep",
        "2",
        "--",
        "sleep",
        "100",
    ])
    .unwrap();

    let cfg = load_and_resolve(Some(file.path()), args.overrides()).unwrap();
    assert_eq!(cfg.paths, vec![PathBuf::from("from-file.txt")]);
    assert_eq!(cfg.command, vec!["sleep".to_string(), "100".to_string()]);
    assert_eq!(cfg.poll_interval, Duration::from_secs(2));
    assert_eq!(cfg.term_timeout, Duration::from_secs(10));
}

#[test]
fn empty_file_without_cli_values_is_fatal() {
    let file = write_config("");
    let result = load_and_resolve(Some(file.path()), ConfigOverrides::default());
    assert!(matches!(result, Err(ChangewatchError::Config(_))));
}
