//! Integration tests for the csvconv binary
//!
//! These tests drive the built executable end to end:
//! - Reading CSV from stdin and from files
//! - Writing JSON to stdout or an output file
//! - Option handling and error reporting

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn run_csvconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csvconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute csvconv")
}

fn run_csvconv_with_stdin(args: &[&str], stdin_data: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_csvconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn csvconv");

    if let Some(mut stdin) = child.stdin.take() {
        // The child may exit before reading stdin (e.g. on a configuration
        // error); a broken pipe here is expected in that case.
        if let Err(e) = stdin.write_all(stdin_data.as_bytes()) {
            assert_eq!(
                e.kind(),
                std::io::ErrorKind::BrokenPipe,
                "Failed to write to stdin: {e}"
            );
        }
    }

    child.wait_with_output().expect("Failed to wait on child")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be JSON")
}

#[test]
fn test_stdin_conversion() {
    let output = run_csvconv_with_stdin(&["--stdin"], "name,age\nAlice,30\nBob,x\n");

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([{"name": "Alice", "age": 30}, {"name": "Bob", "age": "x"}])
    );
}

#[test]
fn test_stdin_keys_keep_header_order() {
    let output = run_csvconv_with_stdin(&["--stdin", "--plain"], "z,a\n1,2\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), r#"[{"z":1,"a":2}]"#);
}

#[test]
fn test_no_header_and_delimiter_options() {
    let output = run_csvconv_with_stdin(
        &["--stdin", "--no-header", "--delimiter", "semicolon"],
        "1;a\n2;b\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([
            {"column_1": 1, "column_2": "a"},
            {"column_1": 2, "column_2": "b"}
        ])
    );
}

#[test]
fn test_file_to_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "name,city\n\"Doe, Jane\",Porto\n").unwrap();
    let output_path = dir.path().join("out/people.json");

    let output = run_csvconv(&[
        input.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Converted 1 records"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output_path).unwrap()).unwrap();
    assert_eq!(written, serde_json::json!([{"name": "Doe, Jane", "city": "Porto"}]));
}

#[test]
fn test_empty_document_fails() {
    let output = run_csvconv_with_stdin(&["--stdin"], "\n  \n\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_delimiter_is_rejected() {
    let output = run_csvconv_with_stdin(&["--stdin", "--delimiter", "ab"], "a\n1\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid delimiter"));
}

#[test]
fn test_missing_input_path() {
    let output = run_csvconv(&["/no/such/input.csv"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_validate_only_reports_irregular_rows() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ragged.csv");
    fs::write(&input, "a,b\n1\n1,2,3\n").unwrap();

    let output = run_csvconv(&[input.to_str().unwrap(), "--validate-only"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
    assert!(stderr.contains("line 3"), "stderr: {}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid CSV"));
}

#[test]
fn test_validate_only_fails_on_empty_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blank.csv");
    fs::write(&input, "\n\n").unwrap();

    let output = run_csvconv(&[input.to_str().unwrap(), "--validate-only"]);
    assert!(!output.status.success());
}

#[test]
fn test_empty_document_reported_once() {
    let output = run_csvconv_with_stdin(&["--stdin"], "\n\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("CSV file is empty").count(), 1, "stderr: {}", stderr);
    assert!(!stderr.contains("Error:"), "stderr: {}", stderr);
}

#[test]
fn test_configuration_error_reported_once() {
    let output = run_csvconv_with_stdin(&["--stdin", "--delimiter", "ab"], "a\n1\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Invalid delimiter").count(), 1, "stderr: {}", stderr);
    assert!(!stderr.contains("Error:"), "stderr: {}", stderr);
}

#[test]
fn test_validate_only_applies_memory_limit_to_stdin() {
    let input = format!("id,value\n{}", "1,abcdefgh\n".repeat(200));

    let output = run_csvconv_with_stdin(
        &["--stdin", "--validate-only", "--memory-limit", "1KB"],
        &input,
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too large"), "stderr: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("valid CSV"));
}
