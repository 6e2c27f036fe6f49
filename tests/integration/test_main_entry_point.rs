// main.rsとエントリーポイントのテスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{run_binary, stderr_of, stdout_of};

#[test]
fn test_cli_help() {
    let output = run_binary(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("value_combiner"));
    assert!(stdout.contains("VALUE"));
    assert!(stdout.contains("--self-check"));
}

#[test]
fn test_cli_version() {
    let output = run_binary(&["--version"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("value_combiner"));
}

#[test]
fn test_sum_of_two_numbers() {
    let output = run_binary(&["5", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "8.0\n");
}

#[test]
fn test_sum_of_decimals() {
    let output = run_binary(&["10.5", "7.3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "17.8\n");
}

#[test]
fn test_sum_with_negative_number() {
    let output = run_binary(&["-5", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-2.0\n");
}

#[test]
fn test_concatenation_of_strings() {
    let output = run_binary(&["Hello", "World"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "HelloWorld\n");
}

#[test]
fn test_concatenation_of_text_and_number() {
    let output = run_binary(&["Number", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Number42\n");
}

#[test]
fn test_wrong_argument_counts_fail() {
    for args in [vec![], vec!["1"], vec!["1", "2", "3"]] {
        let output = run_binary(&args);
        assert!(!output.status.success(), "args {args:?} should fail");
        assert_eq!(output.status.code(), Some(2));
        assert!(stdout_of(&output).is_empty());

        let stderr = stderr_of(&output);
        assert!(stderr.contains("invalid argument count"));
        assert!(stderr.contains("Usage"));
    }
}

#[test]
fn test_json_output_format() {
    let output = run_binary(&["--format", "json", "Hello", "World"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["kind"], "concatenation");
    assert_eq!(value["value"], "HelloWorld");
}

#[test]
fn test_verbose_diagnostics_go_to_stderr() {
    let output = run_binary(&["--verbose", "Number", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Number42\n");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("-> text"));
    assert!(stderr.contains("-> number 42"));
}

#[test]
fn test_hyphen_leading_values() {
    let cases = [
        (["-.5", "1"], "0.5\n"),
        (["-inf", "1"], "-inf\n"),
        (["-1e+5", "1"], "-99999.0\n"),
        (["-Hello", "World"], "-HelloWorld\n"),
        (["Hello", "-v"], "Hello-v\n"),
    ];
    for (args, expected) in cases {
        let output = run_binary(&args);
        assert!(output.status.success(), "args {args:?}: {}", stderr_of(&output));
        assert_eq!(stdout_of(&output), expected, "args {args:?}");
    }
}

#[test]
fn test_json_output_non_finite_sum() {
    let output = run_binary(&["--format", "json", "inf", "1"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["kind"], "sum");
    assert_eq!(value["value"], "inf");
}
