//! Exit codes and stdout of the sha1pow binary

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sha1pow"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sha1pow")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_prints_solution_and_exits_zero() {
    let output = run(&["abcdefghijklmnop", "8"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0000000000000163\n");
}

#[test]
fn test_difficulty_zero() {
    let output = run(&["abcdefghijklmnop", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0000000000000000\n");
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    for args in [&[][..], &["abcdefghijklmnop"][..], &["abcdefghijklmnop", "4", "x"][..]] {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(stdout(&output).contains("Usage:"), "args {:?}", args);
    }
}

#[test]
fn test_rejects_problem_length() {
    for problem in ["abcdefghijklmno", "abcdefghijklmnopq"] {
        let output = run(&[problem, "4"]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout(&output),
            "Error: Problem string must be exactly 16 characters long.\n"
        );
    }
}

#[test]
fn test_rejects_difficulty() {
    for difficulty in ["-1", "33"] {
        let output = run(&["abcdefghijklmnop", difficulty]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout(&output),
            "Error: Difficulty must be between 0 and 32.\n"
        );
    }

    let output = run(&["abcdefghijklmnop", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).is_empty());
}

#[test]
fn test_oversized_thread_count_is_an_error() {
    let output = run(&[
        "abcdefghijklmnop",
        "32",
        "--threads",
        "20000",
        "--max-index",
        "100000000",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error: Invalid search settings"));
}

#[test]
fn test_parallel_solution_verifies() {
    let output = run(&["0123456789abcdef", "12", "--threads", "4"]);
    assert_eq!(output.status.code(), Some(0));
    let solution = stdout(&output).trim_end().to_string();
    assert_eq!(solution.len(), 16);

    let check = run(&["0123456789abcdef", "12", "--verify", &solution]);
    assert_eq!(check.status.code(), Some(0));
    assert_eq!(stdout(&check), "valid\n");
}

#[test]
fn test_verify_rejects_weak_solution() {
    let output = run(&["abcdefghijklmnop", "12", "--verify", "0000000000000163"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "invalid\n");
}

#[test]
fn test_exhaustion_is_an_error() {
    let output = run(&["abcdefghijklmnop", "8", "--max-index", "163"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error: No solution found below index 163"));
}

#[test]
fn test_json_report() {
    let output = run(&["abcdefghijklmnop", "4", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["solution"], "0000000000000011");
    assert_eq!(json["index"], 11);
    assert_eq!(json["config"]["max_index"], 10_000_000_000_000_000u64);
}
