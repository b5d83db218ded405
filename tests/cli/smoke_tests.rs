use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn change_version(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_change-version"));
    cmd.current_dir(cwd);
    cmd
}

fn sample_project() -> TempWorkspace {
    let ws = TempWorkspace::new("change_version");
    ws.create_file("style.css", "/*! v4.5.0 */");
    ws.create_file("README", "v4.5.0");
    ws.create_file("node_modules/lib.css", "v4.5.0");
    ws.create_file("data.bin", "4.5.0");
    ws.create_file("docs/notes.txt", "nothing to bump");
    ws
}

fn lines_with(stdout: &[u8], prefix: &str) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_change-version"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("change-version"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn missing_new_version_is_a_usage_error() {
    let ws = sample_project();
    let before = ws.snapshot();

    change_version(ws.path())
        .arg("4.5.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "USAGE: change-version old_version new_version [--verbose] [--dry[-run]]",
        ))
        .stderr(predicate::str::contains(r#"Got arguments: ["4.5.0"]"#));

    assert_eq!(ws.snapshot(), before);
}

#[test]
fn no_arguments_is_a_usage_error() {
    let ws = sample_project();
    change_version(ws.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Got arguments: []"));
}

#[test]
fn bumps_version_outside_excluded_dirs() {
    let ws = sample_project();

    change_version(ws.path())
        .args(["4.5.0", "4.5.1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(ws.read("style.css"), "/*! v4.5.1 */");
    assert_eq!(ws.read("README"), "v4.5.1");
    assert_eq!(ws.read("node_modules/lib.css"), "v4.5.0");
    assert_eq!(ws.read("data.bin"), "4.5.0");
    assert_eq!(ws.read("docs/notes.txt"), "nothing to bump");
}

#[test]
fn verbose_prints_one_line_per_visited_file() {
    let ws = sample_project();

    let output = change_version(ws.path())
        .args(["--verbose", "4.5.0", "4.5.1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let mut changed = lines_with(&output.stdout, "FILE: ");
    changed.sort();
    assert_eq!(changed.len(), 2);
    assert!(changed[0].ends_with("README"));
    assert!(changed[1].ends_with("style.css"));

    let excluded = lines_with(&output.stdout, "EXCLUDED: ");
    assert_eq!(excluded.len(), 1);
    assert!(excluded[0].ends_with("data.bin"));

    let skipped = lines_with(&output.stdout, "SKIPPED: ");
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].ends_with("notes.txt"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("node_modules"));
}

#[test]
fn dry_run_reports_without_writing() {
    for flag in ["--dry", "--dry-run"] {
        let ws = sample_project();
        let before = ws.snapshot();

        let output = change_version(ws.path())
            .args(["4.5.0", "4.5.1", "--verbose", flag])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(lines_with(&output.stdout, "FILE: ").len(), 2);
        assert_eq!(ws.snapshot(), before);
    }
}

#[test]
fn second_run_changes_nothing() {
    let ws = sample_project();

    change_version(ws.path())
        .args(["4.5.0", "4.5.1"])
        .assert()
        .success();
    let after_first = ws.snapshot();

    let output = change_version(ws.path())
        .args(["4.5.0", "4.5.1", "--verbose"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(lines_with(&output.stdout, "FILE: ").is_empty());
    assert_eq!(ws.snapshot(), after_first);
}

#[test]
fn dollar_in_new_version_is_written_verbatim() {
    let ws = TempWorkspace::new("change_version");
    ws.create_file("VERSION", "1.2.3 1a2b3");

    change_version(ws.path())
        .args(["1.2.3", "$1.2.4"])
        .assert()
        .success();

    assert_eq!(ws.read("VERSION"), "$1.2.4 1a2b3");
}

#[cfg(unix)]
#[test]
fn traversal_failure_exits_with_message() {
    let ws = TempWorkspace::new("change_version");
    ws.create_file("README", "4.5.0");
    ws.create_unlistable_dir("deep");

    change_version(ws.path())
        .args(["4.5.0", "4.5.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "ERROR while traversing directory!:\n",
        ))
        .stderr(predicate::str::contains("Application Error").not());
}

#[cfg(unix)]
#[test]
fn write_failure_is_an_application_error() {
    let ws = TempWorkspace::new("change_version");
    ws.create_file("README", "v4.5.0");

    // A zero file-size limit makes every write fail with the signal ignored.
    Command::new("sh")
        .arg("-c")
        .arg(r#"trap '' XFSZ; ulimit -f 0; exec "$0" "$@""#)
        .arg(env!("CARGO_BIN_EXE_change-version"))
        .args(["4.5.0", "4.5.1"])
        .current_dir(ws.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "Application Error: Failed to write file",
        ))
        .stderr(predicate::str::contains("README"));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ws = sample_project();
    let before = ws.snapshot();

    change_version(ws.path())
        .arg("4.5.0")
        .arg(OsStr::from_bytes(b"4.5.\xff"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    assert_eq!(ws.snapshot(), before);
}
