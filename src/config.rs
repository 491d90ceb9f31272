//! Configuration for rosterdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RosterError;

/// Main configuration for a rosterdb instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Flat file used by `save` / `load` when no path is given
    pub data_file: PathBuf,

    /// fsync the data file after every save
    pub sync_on_save: bool,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// What `insert` does when the identifier is already present
    pub duplicate_policy: DuplicatePolicy,
}

/// Behaviour of `insert` for an identifier that is already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Remove the existing record, then insert the new one at the head
    #[default]
    Upsert,

    /// Prepend the new record and repoint the index at it. The older record
    /// stays in the sequence but can no longer be looked up.
    Shadow,
}

impl FromStr for DuplicatePolicy {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upsert" => Ok(DuplicatePolicy::Upsert),
            "shadow" => Ok(DuplicatePolicy::Shadow),
            other => Err(RosterError::Config(format!(
                "unknown duplicate policy '{}' (expected 'upsert' or 'shadow')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("students.txt"),
            sync_on_save: false,
            duplicate_policy: DuplicatePolicy::Upsert,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the default data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// fsync after every save
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Set the duplicate identifier policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
