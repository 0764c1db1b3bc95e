//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("upconf"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Locate and merge"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("locate"));
}

#[test]
fn test_locate_walks_up_from_the_working_directory() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("cfg.toml"), "x = 1\n").expect("write");
    let nested = tmp.path().join("src").join("deep");
    fs::create_dir_all(&nested).expect("mkdir");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(&nested).args(["locate", "cfg.toml"]);
    cmd.assert().success().stdout(predicate::str::contains("cfg.toml"));
}

#[test]
fn test_locate_fails_for_a_missing_file() {
    let tmp = TempDir::new().expect("tmp");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(tmp.path()).args(["locate", "definitely-not-here.toml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not locate 'definitely-not-here.toml'"));
}

#[test]
fn test_resolve_merges_later_files_over_earlier_ones() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("a.toml"), "[x]\np = 1\nq = 2\n").expect("write");
    fs::write(tmp.path().join("b.json"), r#"{"x": {"p": 9, "r": 3}}"#).expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(tmp.path()).args(["resolve", "a.toml", "b.json", "--key", "x"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"p\": 9"))
        .stdout(predicate::str::contains("\"q\": 2"))
        .stdout(predicate::str::contains("\"r\": 3"));
}

#[test]
fn test_resolve_reports_the_consumed_key_prefix() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("a.toml"), "[x]\np = 1\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(tmp.path()).args(["resolve", "a.toml", "--key", "x.missing"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("configuration 'x.missing' not found"));
}

#[test]
fn test_resolve_ignores_stray_dots_in_the_key_path() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("a.toml"), "[x]\np = 1\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(tmp.path()).args(["resolve", "a.toml", "--key", "x..p."]);
    cmd.assert().success().stdout(predicate::str::contains("1"));
}

#[test]
fn test_resolve_allow_missing_skips_absent_files() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("present.toml"), "[k]\nv = 1\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(tmp.path())
        .args(["resolve", "missing.toml", "present.toml", "--key", "k", "--allow-missing"]);
    cmd.assert().success().stdout(predicate::str::contains("\"v\": 1"));
}

#[test]
fn test_resolve_fails_on_an_unknown_extension() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("cfg.conf"), "whatever\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.current_dir(tmp.path()).args(["resolve", "cfg.conf"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no reader registered for extension 'conf'"));
}

#[test]
fn test_resolve_rejects_an_unknown_strategy() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("upconf"));
    cmd.args(["resolve", "a.toml", "--strategy", "upward"]);
    cmd.assert().failure().stderr(predicate::str::contains("unknown strategy 'upward'"));
}
