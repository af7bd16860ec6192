use std::process::{Command, Output};

fn miracle(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_miracle"))
        .args(args)
        .output()
        .expect("binary should launch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr should be utf-8")
}

#[test]
fn echoes_profile_and_email() {
    let output = miracle(&["alice", "alice@example.com"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "arg1 = alice\narg2 = alice@example.com\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn repeated_invocations_match() {
    let first = miracle(&["bob", "bob@example.org"]);
    let second = miracle(&["bob", "bob@example.org"]);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn no_arguments_is_a_usage_error() {
    let output = miracle(&[]);
    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn one_argument_is_a_usage_error() {
    let output = miracle(&["alice"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("Usage:"));
    assert!(!err.contains("arg1 ="));
}

#[test]
fn extra_arguments_are_rejected() {
    let output = miracle(&["alice", "alice@example.com", "extra"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("extra"));
    assert!(err.contains("Usage:"));
}

#[test]
fn json_mode_prints_object() {
    let output = miracle(&["--json", "alice", "alice@example.com"]);
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["arg1"], "alice");
    assert_eq!(value["arg2"], "alice@example.com");
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let output = miracle(&["-vv", "alice", "alice@example.com"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "arg1 = alice\narg2 = alice@example.com\n");
    assert!(stderr(&output).contains("echoing git identity"));
}

#[test]
fn help_exits_successfully() {
    let output = miracle(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("GIT_PROFILE_NAME"));
}
