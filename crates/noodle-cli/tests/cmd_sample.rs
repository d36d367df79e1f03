//! Integration tests for `noodle sample`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `noodle` binary.
fn noodle_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("noodle");
    path
}

#[test]
fn sample_prints_square_matrix() {
    let out = Command::new(noodle_bin())
        .args(["sample", "--noodles", "5", "--seed", "11"])
        .output()
        .expect("run noodle sample");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows: Vec<&str> = stdout.lines().take(5).collect();
    for row in &rows {
        assert_eq!(row.split_whitespace().count(), 5, "row: {row}");
    }
    assert!(stdout.contains("Loops: "), "stdout: {stdout}");
}

#[test]
fn sample_single_noodle_self_pairs() {
    let out = Command::new(noodle_bin())
        .args(["sample", "-n", "1", "--format", "json"])
        .output()
        .expect("run noodle sample");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["matrix"], serde_json::json!([[1]]));
    assert_eq!(value["loops"], 1);
}

#[test]
fn sample_rows_have_degree_two() {
    let out = Command::new(noodle_bin())
        .args(["sample", "-n", "9", "--seed", "4", "-f", "json"])
        .output()
        .expect("run noodle sample");
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    let matrix = value["matrix"].as_array().expect("rows");
    for (i, row) in matrix.iter().enumerate() {
        let cells: Vec<u64> = row
            .as_array()
            .expect("cells")
            .iter()
            .map(|c| c.as_u64().expect("integer"))
            .collect();
        let off: u64 = cells
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &c)| c)
            .sum();
        assert_eq!(2 * cells[i] + off, 2, "row {i}: {cells:?}");
    }
}

#[test]
fn sample_zero_noodles_exits_2() {
    let out = Command::new(noodle_bin())
        .args(["sample", "-n", "0"])
        .output()
        .expect("run noodle sample");
    assert_eq!(out.status.code(), Some(2));
}
