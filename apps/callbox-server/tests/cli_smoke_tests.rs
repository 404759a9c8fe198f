//! CLI smoke tests for the callbox-server binary.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the callbox-server binary with the given arguments.
fn run_callbox_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_callbox-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to execute callbox-server")
}

#[test]
fn help_lists_subcommands_and_options() {
    let output = run_callbox_server(&["--help"]);
    assert!(output.status.success(), "help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("callbox-server"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--port"));
}

#[test]
fn check_accepts_a_valid_config_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
    writeln!(file, "server:\n  bind_addr: \"127.0.0.1:6001\"").unwrap();

    let output = run_callbox_server(&["--config", file.path().to_str().unwrap(), "check"]);
    assert!(output.status.success(), "check should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("6001"));
}

#[test]
fn missing_config_file_is_an_error() {
    let output = run_callbox_server(&["--config", "/nonexistent/callbox.yaml", "check"]);
    assert!(!output.status.success(), "missing config file should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}
