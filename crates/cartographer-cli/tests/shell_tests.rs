//! Integration tests for the interactive shell
//!
//! These tests drive full sessions with scripted input and inspect the output.

use cartographer_cli::config::OutputFormat;
use cartographer_cli::shell::{LineSource, ReadOutcome, Shell, ShellState};
use cartographer_cli::{Formatter, Result};
use cartographer_domain::{Domain, Entity, MemorySource, Relationship, Topic};
use cartographer_store::JsonArchive;
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

/// Replays a fixed list of lines, then reports end of input.
struct ScriptedInput {
    lines: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

fn topics() -> Vec<Topic> {
    vec![
        Topic::new("A", "Domain A", "first"),
        Topic::new("B", "Domain B", "second"),
    ]
}

fn source() -> MemorySource {
    MemorySource::new()
        .with_domain(
            "A",
            Domain {
                entities: vec![Entity::new("e1", "Alpha")],
                ..Domain::default()
            },
        )
        .with_domain(
            "B",
            Domain {
                entities: vec![Entity::new("e1", "Alpha-dup"), Entity::new("e2", "Beta")],
                relationships: vec![Relationship::new("e1", "e2", "rel")],
                sources: vec![],
            },
        )
}

fn run_session(lines: &[&str]) -> (String, ShellState) {
    let source = source();
    let formatter = Formatter::new(OutputFormat::Table, false);
    let mut shell = Shell::new(&source, &formatter, topics());
    let mut input = ScriptedInput::new(lines);
    let mut out = Vec::new();

    shell.run(&mut input, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), shell.state().clone())
}

#[test]
fn test_list_and_exit() {
    let (output, state) = run_session(&["1", "4"]);
    assert!(output.contains("Domain A"));
    assert!(output.contains("Domain B"));
    assert!(output.contains("Farewell"));
    assert_eq!(state, ShellState::Exit);
}

#[test]
fn test_end_of_input_ends_session() {
    let (_, state) = run_session(&[]);
    assert_eq!(state, ShellState::MainMenu);
}

#[test]
fn test_explore_domain_and_analyze() {
    let (output, _) = run_session(&["2", "B", "1", "4", "5", "q"]);
    assert!(output.contains("[B] Domain Explorer"));
    assert!(output.contains("Alpha-dup"));
    assert!(output.contains("★ Cluster center: Alpha-dup (1 connections)"));
    assert!(output.contains("★ Cluster center: Beta (1 connections)"));
}

#[test]
fn test_unknown_domain_returns_to_main_menu() {
    let (output, state) = run_session(&["2", "nope"]);
    assert!(output.contains("Unknown domain: 'nope'"));
    assert_eq!(state, ShellState::MainMenu);
}

#[test]
fn test_merge_first_seen_wins() {
    let (output, state) = run_session(&["3", "A, B", "1"]);
    assert!(output.contains("Merged domains: A, B"));
    assert!(output.contains("Alpha"));
    assert!(!output.contains("Alpha-dup"));
    assert_eq!(
        state,
        ShellState::MergedMenu(vec!["A".to_string(), "B".to_string()])
    );
}

#[test]
fn test_merge_with_one_valid_id_is_rejected() {
    let (output, state) = run_session(&["3", "A, missing"]);
    assert!(output.contains("At least two valid domain ids are required"));
    assert_eq!(state, ShellState::MainMenu);
}

#[test]
fn test_unknown_command_is_reported() {
    let (output, state) = run_session(&["7"]);
    assert!(output.contains("Unknown command: '7'"));
    assert_eq!(state, ShellState::MainMenu);
}

#[test]
fn test_prompts_follow_state() {
    let source = source();
    let formatter = Formatter::new(OutputFormat::Table, false);
    let mut shell = Shell::new(&source, &formatter, topics());
    let mut input = ScriptedInput::new(&["2", "A", "5"]);
    let mut out = Vec::new();

    shell.run(&mut input, &mut out).unwrap();
    assert_eq!(
        input.prompts,
        [
            "command > ",
            "domain id > ",
            "sub-command > ",
            "command > "
        ]
    );
}

#[test]
fn test_load_warnings_are_shown_for_json_archive() {
    let dir = TempDir::new().unwrap();
    let domain_dir = dir.path().join("topics").join("A");
    fs::create_dir_all(&domain_dir).unwrap();
    fs::write(domain_dir.join("entities.json"), r#"[{"id": "e1", "name": "Alpha"}]"#).unwrap();
    fs::write(domain_dir.join("relationships.json"), "not json").unwrap();

    let archive = JsonArchive::new(dir.path());
    let formatter = Formatter::new(OutputFormat::Table, false);
    let mut shell = Shell::new(&archive, &formatter, topics());
    let mut input = ScriptedInput::new(&["2", "A", "1"]);
    let mut out = Vec::new();

    shell.run(&mut input, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("⚠ [A] relationships unavailable"));
    assert!(output.contains("⚠ [A] sources unavailable"));
    assert!(output.contains("Alpha"));
    assert_eq!(shell.state(), &ShellState::DomainMenu("A".to_string()));
}
