//! Integration tests for the `locate` action
//!
//! `locate` prints the 1-based LINE:COL position of an existing dotted
//! key path.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use indoc::indoc;
use similar::TextDiff;

/// Get path to the yamlkey binary
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("yamlkey");
    path
}

/// Run yamlkey with given args and stdin, return (stdout, stderr, success)
fn run_yamlkey(args: &[&str], stdin_data: &str) -> (String, String, bool) {
    let binary = binary_path();

    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn yamlkey");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .expect("Failed to write to stdin");
    }

    let output = child.wait_with_output().expect("Failed to wait on child");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Assert that actual output equals expected, showing a colored diff on failure
fn assert_output_eq(actual: &str, expected: &str) {
    if actual != expected {
        let diff = TextDiff::from_lines(expected, actual);
        eprintln!();
        for line in diff
            .unified_diff()
            .header("expected", "actual")
            .to_string()
            .lines()
        {
            if line.starts_with('-') {
                eprintln!("\x1b[31m{}\x1b[0m", line);
            } else if line.starts_with('+') {
                eprintln!("\x1b[32m{}\x1b[0m", line);
            } else if line.starts_with('@') {
                eprintln!("\x1b[36m{}\x1b[0m", line);
            } else {
                eprintln!("{}", line);
            }
        }
        panic!("Output mismatch - see diff above");
    }
}

const NESTED: &str = indoc! {"
    a:
      b:
        c: 1
      d: 2
"};

#[test]
fn test_locate_nested_key() {
    let (stdout, stderr, success) = run_yamlkey(&["locate", "a.b.c"], NESTED);
    assert!(success, "stderr: {}", stderr);
    assert_output_eq(&stdout, "3:5\n");
}

#[test]
fn test_locate_second_branch() {
    let (stdout, stderr, success) = run_yamlkey(&["locate", "a.d"], NESTED);
    assert!(success, "stderr: {}", stderr);
    assert_output_eq(&stdout, "4:3\n");
}

#[test]
fn test_locate_top_level_key() {
    let (stdout, stderr, success) = run_yamlkey(&["locate", "a"], NESTED);
    assert!(success, "stderr: {}", stderr);
    assert_output_eq(&stdout, "1:1\n");
}

#[test]
fn test_locate_first_of_duplicate_keys() {
    let (stdout, stderr, success) = run_yamlkey(&["locate", "x"], "x: 1\nx: 2\n");
    assert!(success, "stderr: {}", stderr);
    assert_output_eq(&stdout, "1:1\n");
}

#[test]
fn test_locate_missing_key() {
    let (stdout, stderr, success) = run_yamlkey(&["locate", "a.q"], NESTED);
    assert!(!success, "locate should fail for a missing path");
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("not found"),
        "Expected a not-found message: {}",
        stderr
    );
}

#[test]
fn test_locate_not_a_path() {
    let (_stdout, stderr, success) = run_yamlkey(&["locate", "a..b"], NESTED);
    assert!(!success, "locate should reject a malformed path");
    assert!(
        stderr.contains("Not a key path"),
        "Expected a rejection message: {}",
        stderr
    );
}

#[test]
fn test_locate_quiet_missing_key() {
    let (stdout, _stderr, success) = run_yamlkey(&["-q", "locate", "a.q"], NESTED);
    assert!(!success);
    assert!(stdout.is_empty());
}

// =============================================================================
// Global flags
// =============================================================================

#[test]
fn test_version_flag() {
    let (stdout, stderr, success) = run_yamlkey(&["-V"], "");
    assert!(success, "stderr: {}", stderr);
    assert!(
        stdout.contains("version:"),
        "Expected a version line: {}",
        stdout
    );
}

#[test]
fn test_missing_action() {
    let (_stdout, stderr, success) = run_yamlkey(&[], "");
    assert!(!success, "running without an action should fail");
    assert!(
        stderr.contains("Missing action"),
        "Expected a missing-action error: {}",
        stderr
    );
}
