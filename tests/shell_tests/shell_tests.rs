//! Shell Tests
//!
//! Tests verify:
//! - Command parsing, including menu-number aliases
//! - Command execution output
//! - The read loop keeps going after bad input and failed loads

use std::io::Cursor;
use std::path::PathBuf;

use rosterdb::shell::{Command, Flow, Shell};
use rosterdb::{Config, Record, RecordUpdate, SortKey};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_shell(temp_dir: &TempDir) -> Shell {
    let config = Config::builder()
        .data_file(temp_dir.path().join("students.txt"))
        .build();
    Shell::new(config)
}

fn run_script(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    shell.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn execute(shell: &mut Shell, line: &str) -> String {
    let command = Command::parse(line).unwrap().unwrap();
    let mut out = Vec::new();
    shell.execute(command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_add() {
    let command = Command::parse("add Alice 1 CS A 3.8").unwrap();

    assert_eq!(command, Some(Command::Add(Record::new("Alice", 1, "CS", "A", 3.8))));
}

#[test]
fn test_parse_update() {
    let command: Command = "update 2 Robert ME C 3.5".parse().unwrap();

    assert_eq!(
        command,
        Command::Update {
            id: 2,
            update: RecordUpdate::new("Robert", "ME", "C", 3.5),
        }
    );
}

#[test]
fn test_parse_simple_commands() {
    assert_eq!(Command::parse("del 4").unwrap(), Some(Command::Delete { id: 4 }));
    assert_eq!(Command::parse("GET 4").unwrap(), Some(Command::Search { id: 4 }));
    assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
    assert_eq!(Command::parse("sort name").unwrap(), Some(Command::Sort(SortKey::Name)));
    assert_eq!(Command::parse("save").unwrap(), Some(Command::Save { path: None }));
    assert_eq!(
        Command::parse("load other.txt").unwrap(),
        Some(Command::Load {
            path: Some(PathBuf::from("other.txt"))
        })
    );
    assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
}

#[test]
fn test_parse_menu_numbers() {
    assert_eq!(Command::parse("3 7").unwrap(), Some(Command::Search { id: 7 }));
    assert_eq!(Command::parse("5").unwrap(), Some(Command::List));
    assert_eq!(Command::parse("6").unwrap(), Some(Command::Sort(SortKey::Score)));
    assert_eq!(Command::parse("7").unwrap(), Some(Command::Sort(SortKey::Name)));
    assert_eq!(Command::parse("10").unwrap(), Some(Command::Quit));
}

#[test]
fn test_parse_blank_line() {
    assert_eq!(Command::parse("   ").unwrap(), None);
    assert!("".parse::<Command>().is_err());
}

#[test]
fn test_parse_errors() {
    assert!(Command::parse("add Alice 1 CS A").is_err());
    assert!(Command::parse("add Alice one CS A 3.8").is_err());
    assert!(Command::parse("add Alice 1 CS A top").is_err());
    assert!(Command::parse("del").is_err());
    assert!(Command::parse("sort age").is_err());
    assert!(Command::parse("save a b").is_err());
    assert!(Command::parse("frobnicate").is_err());
}

// =============================================================================
// Execution Tests
// =============================================================================

#[test]
fn test_execute_add_and_search() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    assert_eq!(execute(&mut shell, "add Alice 1 CS A 3.8"), "Added student 1\n");
    assert_eq!(
        execute(&mut shell, "get 1"),
        "Name: Alice, Id: 1, Department: CS, Section: A, Score: 3.8\n"
    );
    assert_eq!(execute(&mut shell, "get 2"), "Student not found!\n");
}

#[test]
fn test_execute_add_duplicate_replaces() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    execute(&mut shell, "add Alice 1 CS A 3.8");

    assert_eq!(execute(&mut shell, "add Alicia 1 EE B 3.1"), "Replaced student 1\n");
    assert_eq!(shell.store().len(), 1);
}

#[test]
fn test_execute_delete_and_update_missing_are_silent() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    assert_eq!(execute(&mut shell, "del 9"), "");
    assert_eq!(execute(&mut shell, "update 9 X Y Z 1.0"), "");
}

#[test]
fn test_execute_list_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    assert_eq!(execute(&mut shell, "list"), "No students.\n");
}

#[test]
fn test_execute_sort_and_list() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);
    execute(&mut shell, "add Alice 1 CS A 3.8");
    execute(&mut shell, "add Bob 2 CS B 3.2");

    assert_eq!(execute(&mut shell, "sort score"), "Sorted by score\n");

    let listing = execute(&mut shell, "list");
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Name: Bob"));
    assert!(lines[1].starts_with("Name: Alice"));
}

#[test]
fn test_execute_quit() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);
    let mut out = Vec::new();

    let flow = shell.execute(Command::Quit, &mut out).unwrap();

    assert_eq!(flow, Flow::Exit);
    assert_eq!(out, b"Exiting...\n");
}

#[test]
fn test_execute_load_missing_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);
    let mut out = Vec::new();

    let err = shell.execute(Command::Load { path: None }, &mut out).unwrap_err();

    assert!(err.is_resource_unavailable());
}

// =============================================================================
// Read Loop Tests
// =============================================================================

#[test]
fn test_run_save_and_load_default_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    let output = run_script(&mut shell, "add Alice 1 CS A 3.8\nadd Bob 2 CS B 3.2\nsave\nquit\n");
    assert!(output.contains("Saved 2 record(s)"));
    assert!(temp_dir.path().join("students.txt").exists());

    let mut fresh = setup_shell(&temp_dir);
    let output = run_script(&mut fresh, "load\nget 2\n");
    assert!(output.contains("Loaded 2 record(s)"));
    assert!(output.contains("Name: Bob, Id: 2"));
}

#[test]
fn test_run_continues_after_errors() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    let output = run_script(
        &mut shell,
        "bogus\nload nowhere.txt\n\nadd Alice 1 CS A 3.8\nquit\nadd Bob 2 CS B 3.2\n",
    );

    assert!(output.contains("unknown command 'bogus'"));
    assert!(output.contains("File could not be opened"));
    assert!(output.contains("Added student 1"));
    assert!(output.contains("Exiting..."));
    // Nothing after quit runs
    assert_eq!(shell.store().len(), 1);
}

#[test]
fn test_run_stops_at_end_of_input() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = setup_shell(&temp_dir);

    run_script(&mut shell, "add Alice 1 CS A 3.8");

    let store = shell.into_store();
    assert!(store.contains(1));
}
