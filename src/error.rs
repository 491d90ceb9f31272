//! Error types for rosterdb
//!
//! Core store operations are total and never fail. Only the persistence
//! boundary, the shell parser and configuration produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for rosterdb operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be opened. The store is left untouched.
    #[error("File could not be opened: {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("Invalid command: {0}")]
    Command(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// Whether this error came from failing to open the backing file
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, RosterError::ResourceUnavailable { .. })
    }
}
