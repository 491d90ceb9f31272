//! Shell Module
//!
//! Interactive line-command front end over a [`RecordStore`].
//!
//! ## Responsibilities
//! - Parse one command per input line
//! - Route commands to the store and the persistence helpers
//! - Report failures (bad input, unopenable files) and keep running

mod command;

pub use command::{Command, USAGE};

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::persist;
use crate::store::RecordStore;

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the store for the lifetime of an interactive session
pub struct Shell {
    store: RecordStore,
    config: Config,
}

impl Shell {
    /// Start with an empty store built from `config`
    pub fn new(config: Config) -> Self {
        let store = RecordStore::from_config(&config);
        Self { store, config }
    }

    /// Start with an existing store
    pub fn with_store(store: RecordStore, config: Config) -> Self {
        Self { store, config }
    }

    /// Execute a command, writing any output to `out`
    ///
    /// Lookups that miss are reported as text, never as errors.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "executing command");

        match command {
            Command::Add(record) => {
                let id = record.id;
                match self.store.insert(record) {
                    Some(_) => writeln!(out, "Replaced student {}", id)?,
                    None => writeln!(out, "Added student {}", id)?,
                }
            }
            Command::Delete { id } => {
                if self.store.delete(id).is_some() {
                    writeln!(out, "Deleted student {}", id)?;
                }
            }
            Command::Search { id } => match self.store.search(id) {
                Some(record) => writeln!(out, "{}", record)?,
                None => writeln!(out, "Student not found!")?,
            },
            Command::Update { id, update } => {
                if self.store.update(id, update) {
                    writeln!(out, "Updated student {}", id)?;
                }
            }
            Command::List => {
                if self.store.is_empty() {
                    writeln!(out, "No students.")?;
                }
                for record in &self.store {
                    writeln!(out, "{}", record)?;
                }
            }
            Command::Sort(key) => {
                self.store.sort(key);
                writeln!(out, "Sorted by {}", key)?;
            }
            Command::Save { path } => {
                let path = self.resolve(path);
                let written = persist::save_to_path(&self.store, &path, self.config.sync_on_save)?;
                writeln!(out, "Saved {} record(s) to {}", written, path.display())?;
            }
            Command::Load { path } => {
                let path = self.resolve(path);
                let loaded = persist::load_from_path(&mut self.store, &path)?;
                writeln!(out, "Loaded {} record(s) from {}", loaded, path.display())?;
            }
            Command::Help => writeln!(out, "{}", USAGE)?,
            Command::Quit => {
                writeln!(out, "Exiting...")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Read commands from `input` until `quit` or end of input
    ///
    /// Parse and persistence failures are printed and the loop continues.
    /// Only a failure to read input or write output ends the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            match self.execute(command, out) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "{}", e)?;
                }
            }
        }

        Ok(())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn into_store(self) -> RecordStore {
        self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn resolve(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.config.data_file.clone())
    }
}
