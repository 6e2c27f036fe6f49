// セルフチェックレポートの統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{run_binary, stderr_of, stdout_of};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_self_check_json_to_stdout() {
    let output = run_binary(&["--self-check"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(report["tool"], "value_combiner");
    assert_eq!(report["failed"], 0);
    assert!(report["total"].as_u64().unwrap() >= 5);

    let names: Vec<&str> = report["cases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"add_integers"));
    assert!(names.contains(&"concat_text_and_number"));
    assert!(stderr_of(&output).contains("self-check:"));
}

#[test]
fn test_self_check_junit_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("combiner-report.xml");

    let output = run_binary(&[
        "--self-check",
        "--report-format",
        "junit",
        "--report-output",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.contains("<testsuite name=\"value_combiner\""));
    assert!(xml.contains("failures=\"0\""));
    assert!(xml.contains("<testcase name=\"add_decimals\""));
}

#[test]
fn test_self_check_quiet() {
    let output = run_binary(&["--self-check", "--quiet", "--report-format", "text"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).is_empty());
    assert!(stdout_of(&output).contains("PASS add_integers"));
}

#[test]
fn test_self_check_rejects_values() {
    let output = run_binary(&["--self-check", "1", "2"]);
    assert!(!output.status.success());
}

#[test]
fn test_self_check_unwritable_output_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("report.json");

    let output = run_binary(&["--self-check", "--report-output", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to write self-check report"));
}
