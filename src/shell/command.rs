//! Shell command parsing
//!
//! One command per line, whitespace separated. Menu numbers from the
//! classic numbered menu are accepted as aliases.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, RosterError};
use crate::persist::FIELDS_PER_RECORD;
use crate::record::{Record, RecordId, RecordUpdate};
use crate::sort::SortKey;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add NAME ID DEPT SECTION SCORE`
    Add(Record),

    /// `del ID`
    Delete { id: RecordId },

    /// `get ID`
    Search { id: RecordId },

    /// `update ID NAME DEPT SECTION SCORE`
    Update { id: RecordId, update: RecordUpdate },

    /// `list`
    List,

    /// `sort score|name|id`
    Sort(SortKey),

    /// `save [PATH]`
    Save { path: Option<PathBuf> },

    /// `load [PATH]`
    Load { path: Option<PathBuf> },

    Help,

    Quit,
}

pub const USAGE: &str = "\
Commands:
  add NAME ID DEPT SECTION SCORE      (1)  add a student
  del ID                              (2)  delete a student
  get ID                              (3)  search by id
  update ID NAME DEPT SECTION SCORE   (4)  update a student
  list                                (5)  display all students
  sort score|name|id                  (6 = score, 7 = name)
  save [PATH]                         (8)  save to file
  load [PATH]                         (9)  load from file
  help                                     show this help
  quit                                (10) exit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" | "1" => {
                expect_args(verb, &args, FIELDS_PER_RECORD)?;
                Command::Add(Record::new(
                    args[0],
                    parse_field(args[1], "id")?,
                    args[2],
                    args[3],
                    parse_field(args[4], "score")?,
                ))
            }
            "del" | "delete" | "2" => {
                expect_args(verb, &args, 1)?;
                Command::Delete {
                    id: parse_field(args[0], "id")?,
                }
            }
            "get" | "search" | "3" => {
                expect_args(verb, &args, 1)?;
                Command::Search {
                    id: parse_field(args[0], "id")?,
                }
            }
            "update" | "4" => {
                expect_args(verb, &args, FIELDS_PER_RECORD)?;
                Command::Update {
                    id: parse_field(args[0], "id")?,
                    update: RecordUpdate::new(
                        args[1],
                        args[2],
                        args[3],
                        parse_field(args[4], "score")?,
                    ),
                }
            }
            "list" | "display" | "5" => {
                expect_args(verb, &args, 0)?;
                Command::List
            }
            "sort" => {
                expect_args(verb, &args, 1)?;
                Command::Sort(args[0].parse()?)
            }
            "6" => Command::Sort(SortKey::Score),
            "7" => Command::Sort(SortKey::Name),
            "save" | "8" => Command::Save {
                path: optional_path(verb, &args)?,
            },
            "load" | "9" => Command::Load {
                path: optional_path(verb, &args)?,
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" | "10" => Command::Quit,
            _ => {
                return Err(RosterError::Command(format!(
                    "unknown command '{}' (try 'help')",
                    verb
                )))
            }
        };

        Ok(Some(command))
    }
}

impl FromStr for Command {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)?.ok_or_else(|| RosterError::Command("empty command".to_string()))
    }
}

fn expect_args(verb: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(RosterError::Command(format!(
            "'{}' takes {} argument(s), got {}",
            verb,
            count,
            args.len()
        )));
    }
    Ok(())
}

fn parse_field<T: FromStr>(raw: &str, field: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| RosterError::Command(format!("invalid {}: '{}'", field, raw)))
}

fn optional_path(verb: &str, args: &[&str]) -> Result<Option<PathBuf>> {
    match args {
        [] => Ok(None),
        [path] => Ok(Some(PathBuf::from(path))),
        _ => Err(RosterError::Command(format!(
            "'{}' takes at most one path, got {}",
            verb,
            args.len()
        ))),
    }
}
