//! CLI integration tests for cartographer
//!
//! Runs the one-shot commands end-to-end against a temporary archive.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(base: &Path, relative: &str, contents: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Archive with domains A and B; B's relationships point at A's entity.
fn archive() -> TempDir {
    let dir = TempDir::new().unwrap();
    let base = dir.path();

    write(
        base,
        "indexes/topics-index.json",
        r#"[
            {"id": "A", "title": "Domain A", "description": "first"},
            {"id": "B", "title": "Domain B", "description": "second"}
        ]"#,
    );
    write(
        base,
        "indexes/metadata.json",
        r#"{"created": "2025-01-01", "domains": ["A", "B"]}"#,
    );
    write(base, "topics/A/entities.json", r#"[{"id": "e1", "name": "Alpha"}]"#);
    write(base, "topics/A/relationships.json", "[]");
    write(
        base,
        "topics/A/sources.json",
        r#"[{"id": "s1", "title": "Book", "url": "https://example.org", "trust": "high"}]"#,
    );
    write(
        base,
        "topics/B/entities.json",
        r#"[{"id": "e1", "name": "Alpha-dup"}, {"id": "e2", "name": "Beta"}]"#,
    );
    write(
        base,
        "topics/B/relationships.json",
        r#"[{"source": "e1", "target": "e2", "type": "rel"}]"#,
    );
    write(base, "topics/B/sources.json", "[]");

    dir
}

/// Command isolated from the user's config and environment
fn cartographer(home: &Path, base: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cartographer").unwrap();
    cmd.env("HOME", home)
        .env_remove("CARTOGRAPHER_BASE")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--base")
        .arg(base);
    cmd
}

#[test]
fn test_topics_command() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    cartographer(home.path(), dir.path())
        .args(["topics", "--format", "quiet"])
        .assert()
        .success()
        .stdout("A\nB\n");
}

#[test]
fn test_info_command() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    cartographer(home.path(), dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created: 2025-01-01, domains: A, B"));
}

#[test]
fn test_show_analysis_json() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    let output = cartographer(home.path(), dir.path())
        .args(["show", "B", "--view", "analysis", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["max_degree"], 1);
    assert_eq!(value["cluster_centers"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_show_unknown_domain_fails() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    cartographer(home.path(), dir.path())
        .args(["show", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown domain: 'Z'"));
}

#[test]
fn test_merge_first_seen_wins() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    cartographer(home.path(), dir.path())
        .args(["merge", "A,B", "--view", "entities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Beta"))
        .stdout(predicate::str::contains("Alpha-dup").not());
}

#[test]
fn test_merge_needs_two_valid_domains() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    cartographer(home.path(), dir.path())
        .args(["merge", "A", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least two valid domain ids"));
}

#[test]
fn test_missing_documents_warn_but_succeed() {
    let home = TempDir::new().unwrap();
    let dir = archive();
    fs::remove_file(dir.path().join("topics/A/sources.json")).unwrap();

    cartographer(home.path(), dir.path())
        .args(["show", "A", "--view", "sources", "--format", "quiet"])
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("[A] sources unavailable"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let home = TempDir::new().unwrap();
    let dir = archive();

    cartographer(home.path(), dir.path())
        .args(["--config", "/definitely/not/here.toml", "topics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_base_dir_from_config_file() {
    let home = TempDir::new().unwrap();
    let dir = archive();
    let config_path = home.path().join("custom.toml");
    fs::write(
        &config_path,
        format!("base_dir = {:?}\n", dir.path().display().to_string()),
    )
    .unwrap();

    #[allow(deprecated)]
    Command::cargo_bin("cartographer")
        .unwrap()
        .env("HOME", home.path())
        .env_remove("CARTOGRAPHER_BASE")
        .args(["--config"])
        .arg(&config_path)
        .args(["topics", "--format", "quiet"])
        .assert()
        .success()
        .stdout("A\nB\n");
}
