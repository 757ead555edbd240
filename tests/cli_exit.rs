//! Integration test: exit codes and `--json` output of the `collicheck` binary.
//!
//! Each test runs in a temp directory so no stray `collicheck.toml` applies.

mod common;

use common::*;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collicheck"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("failed to execute collicheck")
}

fn colliding_locale(dir: &TempDir) {
    write_snapshot(dir.path(), "xx", &[(USD_NAME, "Dollar"), (CAD_NAME, "Dollar")]);
}

#[test]
fn test_clean_locale_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_snapshot(dir.path(), "xx", &[(FR_LANG, "French"), (FR_TERR, "French")]);
    let out = run(&dir, &["xx.json", "--phase", "vetting"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_error_collision_exits_three() {
    let dir = TempDir::new().unwrap();
    colliding_locale(&dir);
    let out = run(&dir, &["check", "xx.json", "--phase", "vetting"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn test_warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    colliding_locale(&dir);
    let out = run(&dir, &["xx.json", "--phase", "submission"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_json_output_lists_reports() {
    let dir = TempDir::new().unwrap();
    colliding_locale(&dir);
    let out = run(&dir, &["xx.json", "--phase", "final-testing", "--json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not valid JSON");

    let reports = value.as_array().expect("JSON root must be an array");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["locale"], "xx");
    assert_eq!(reports[0]["errors"], 2);
    let message = reports[0]["entries"][0]["diagnostic"]["message"].as_str().unwrap();
    assert!(message.starts_with("Can't have same translation as [USD: "), "{message}");
}

#[test]
fn test_directory_skips_reference() {
    let dir = TempDir::new().unwrap();
    english(dir.path());
    write_snapshot(dir.path(), "xx", &[(SINGAPORE, "Singapur"), (SG_TERR, "Singapur")]);
    let out = run(&dir, &[".", "--reference", "en.json", "--phase", "vetting", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let locales: Vec<_> = value.as_array().unwrap().iter().map(|r| r["locale"].clone()).collect();
    assert_eq!(locales, vec![serde_json::json!("xx")]);
}

#[test]
fn test_unreadable_snapshot_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.json"), "not json").unwrap();
    let out = run(&dir, &["broken.json"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &["nowhere.json"]);
    assert_eq!(out.status.code(), Some(1));
}
