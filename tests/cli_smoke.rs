use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn steps_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn validate_lists_steps_and_flags_sensitive_ones() {
    let file = steps_file(
        r#"[
            {"id":"1","type":"click","target":"subscribe button"},
            {"id":"2","type":"click","target":"submit comment"}
        ]"#,
    );

    Command::cargo_bin("pagepilot")
        .unwrap()
        .args(["validate"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 steps"))
        .stdout(predicate::str::contains("needs confirmation"));
}

#[test]
fn run_executes_a_quick_sequence_to_completion() {
    let file = steps_file(
        r#"[
            {"id":"1","type":"wait","amount":10},
            {"id":"2","type":"capture"}
        ]"#,
    );

    Command::cargo_bin("pagepilot")
        .unwrap()
        .args(["run", "--yes"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));
}

#[test]
fn run_rejects_a_disallowed_surface() {
    let file = steps_file(r#"[{"id":"1","type":"capture"}]"#);

    Command::cargo_bin("pagepilot")
        .unwrap()
        .args(["run", "--yes", "--url", "https://example.com"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn long_version_reports_build_metadata() {
    Command::cargo_bin("pagepilot")
        .unwrap()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("built"));
}

#[test]
fn policy_prints_the_resolved_allow_list() {
    Command::cargo_bin("pagepilot")
        .unwrap()
        .args(["policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("youtube.com"));
}
