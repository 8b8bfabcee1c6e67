//! Integration tests for the sprout binary

mod harness;

use assert_cmd::Command;
use harness::run_sprout;
use predicates::prelude::*;

const BASE_LISTING: &str = "\
/root(30000)
/root/bin(30000)
/root/bin/vi(10000)
/root/bin/latex(20000)
/root/tmp(0)
/root/usr(0)
";

#[test]
fn test_default_list_output() {
    let (stdout, stderr, success) = run_sprout(&[]);
    assert!(success, "sprout should succeed: {}", stderr);
    assert_eq!(stdout, BASE_LISTING);
}

#[test]
fn test_visit_format_matches_list() {
    let (list, _, ok_list) = run_sprout(&["--format", "list", "--users"]);
    let (visit, _, ok_visit) = run_sprout(&["--format", "visit", "--users"]);
    assert!(ok_list && ok_visit);
    assert_eq!(list, visit);
    assert!(list.contains("/root/usr/tomura/junk.mail(500)"));
    assert!(list.starts_with("/root(31500)\n"));
}

#[test]
fn test_prefix_option() {
    let (stdout, _stderr, success) = run_sprout(&["-p", "/mnt", "-f", "visit"]);
    assert!(success);
    assert!(stdout.starts_with("/mnt/root(30000)\n"));
    assert!(stdout.contains("/mnt/root/bin/latex(20000)\n"));
}

#[test]
fn test_tree_format() {
    let (stdout, _stderr, success) = run_sprout(&["--format", "tree", "--color", "never"]);
    assert!(success);
    assert!(stdout.starts_with("root\n├── bin\n│   ├── vi\n│   └── latex\n"));
    assert!(stdout.ends_with("3 directories, 2 files\n"));
}

#[test]
fn test_tree_format_with_sizes() {
    let (stdout, _stderr, success) = run_sprout(&["-f", "tree", "-s", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("└── latex  [19.5K]"), "{}", stdout);
}

#[test]
fn test_json_format() {
    let (stdout, _stderr, success) = run_sprout(&["--format", "json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["name"], "root");
    assert_eq!(value["size"], 30000);
    assert_eq!(value["children"][0]["children"][1]["name"], "latex");
}

#[test]
fn test_find_option() {
    let (stdout, _stderr, success) = run_sprout(&["--users", "--find", "*.*"]);
    assert!(success);
    assert_eq!(
        stdout,
        "\
/root/usr/yuki/diary.html
/root/usr/yuki/Composite.java
/root/usr/hanako/memo.tex
/root/usr/tomura/game.doc
/root/usr/tomura/junk.mail
"
    );
}

#[test]
fn test_stats_output() {
    let (stdout, _stderr, success) = run_sprout(&["--stats", "--users", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("Files:        7 total"), "{}", stdout);
    assert!(stdout.contains("Directories:  6"));
    assert!(stdout.contains("Largest:      /root/bin/latex (19.5K)"));
}

#[test]
fn test_stats_json_with_jobs() {
    let (stdout, _stderr, success) = run_sprout(&["--stats", "-f", "json", "-j", "2"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["files"], 2);
    assert_eq!(value["directories"], 3);
    assert_eq!(value["total_bytes"], 30000);
}

#[test]
fn test_invalid_pattern_fails() {
    Command::cargo_bin("sprout")
        .unwrap()
        .args(["--find", "[abc"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("sprout: invalid pattern"));
}

#[test]
fn test_invalid_format_rejected() {
    Command::cargo_bin("sprout")
        .unwrap()
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    Command::cargo_bin("sprout")
        .unwrap()
        .arg("-v")
        .assert()
        .success()
        .stdout(BASE_LISTING)
        .stderr(predicate::str::contains("built sample tree"));
}
