//! End-to-end checks for the `sortilege` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TS: &str = "2024-01-01T00:00:00+00:00";

fn sortilege() -> Command {
    Command::cargo_bin("sortilege").unwrap()
}

fn hexagram_args() -> Vec<&'static str> {
    vec![
        "hexagram",
        "-q",
        "Will this project succeed?",
        "--timestamp",
        TS,
        "--iterations",
        "1000",
    ]
}

#[test]
fn hexagram_reference_reading() {
    sortilege()
        .args(hexagram_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jie / Limitation"))
        .stdout(predicate::str::contains("3ed9018f"))
        .stdout(predicate::str::contains("The Abysmal"))
        .stdout(predicate::str::contains("Moving lines: 6"))
        .stdout(predicate::str::contains("Preponderance of the Small"));
}

#[test]
fn hexagram_json_output() {
    let assert = sortilege()
        .args(hexagram_args())
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let reading: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reading["cast_id"], "3ed9018f");
    assert_eq!(reading["lines"], serde_json::json!([8, 7, 8, 8, 7, 9]));
    assert_eq!(reading["primary_record"]["number"], 60);
}

#[test]
fn hexagram_without_nuclear() {
    sortilege()
        .args(hexagram_args())
        .arg("--no-nuclear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nuclear Hexagram").not());
}

#[test]
fn hexagram_iterated_digest_differs() {
    sortilege()
        .args(hexagram_args())
        .args(["--digest", "iterated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("540bb235"));
}

#[test]
fn blank_query_fails() {
    sortilege()
        .args(["hexagram", "-q", "   ", "--iterations", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question is required"));
}

#[test]
fn invalid_timestamp_fails() {
    sortilege()
        .args([
            "hexagram",
            "-q",
            "fine",
            "--timestamp",
            "soon",
            "--iterations",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp"));
}

#[test]
fn unknown_digest_fails() {
    sortilege()
        .args(["hexagram", "-q", "fine", "--digest", "bcrypt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown derivation method"));
}

#[test]
fn tarot_reference_spread() {
    sortilege()
        .args([
            "tarot",
            "-q",
            "Test",
            "--spread",
            "3",
            "--timestamp",
            TS,
            "--iterations",
            "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The High Priestess"))
        .stdout(predicate::str::contains("4 of Pentacles"))
        .stdout(predicate::str::contains("Temperance"))
        .stdout(predicate::str::contains("Reversed"))
        .stdout(predicate::str::contains("Past"))
        .stdout(predicate::str::contains("Future"));
}

#[test]
fn tarot_without_reversals_is_upright() {
    sortilege()
        .args([
            "tarot",
            "-q",
            "Test",
            "--spread",
            "3",
            "--no-reversals",
            "--timestamp",
            TS,
            "--iterations",
            "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reversed").not());
}

#[test]
fn tarot_bad_spread_fails() {
    sortilege()
        .args(["tarot", "-q", "Test", "--spread", "5", "--iterations", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spread size: 5"));
}

#[test]
fn jsonl_save_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readings.jsonl");
    for _ in 0..2 {
        sortilege()
            .args(hexagram_args())
            .arg("--save")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Reading saved"));
    }
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let reading: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(reading["cast_id"], "3ed9018f");
    }
}

#[test]
fn json_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reading.json");
    for _ in 0..2 {
        sortilege()
            .args([
                "tarot",
                "-q",
                "Test",
                "--spread",
                "1",
                "--timestamp",
                TS,
                "--iterations",
                "1000",
            ])
            .arg("--save")
            .arg(&path)
            .assert()
            .success();
    }
    let content = fs::read_to_string(&path).unwrap();
    let reading: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(reading["cards"][0]["card"]["name"], "The High Priestess");
}

#[test]
fn pool_reveals_by_prefix() {
    sortilege()
        .args(["pool", "-q", "Test", "--spread", "1", "--iterations", "1000"])
        .write_stdin("ed7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ed706c84]"))
        .stdout(predicate::str::contains("Ace of Wands"))
        .stdout(predicate::str::contains("Upright"))
        .stderr(predicate::str::contains("Calculating hash 78/78"));
}

#[test]
fn pool_ambiguous_prefix_aborts() {
    sortilege()
        .args(["pool", "-q", "Test", "--spread", "1", "--iterations", "1000"])
        .write_stdin("e4a\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous choice"));
}

#[test]
fn pool_unknown_prefix_aborts() {
    sortilege()
        .args(["pool", "-q", "Test", "--spread", "1", "--iterations", "1000"])
        .write_stdin("zzz\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matching hash"));
}

#[test]
fn pool_short_prefix_rejected() {
    sortilege()
        .args(["pool", "-q", "Test", "--spread", "1", "--iterations", "100"])
        .write_stdin("ed\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 characters"));
}

#[test]
fn pool_wrong_choice_count() {
    sortilege()
        .args(["pool", "-q", "Test", "--spread", "3", "--iterations", "100"])
        .write_stdin("ed7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 comma-separated"));
}
