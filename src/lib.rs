//! # rosterdb
//!
//! A small in-memory student record store with:
//! - O(1) lookup by identifier through a paired index
//! - Most-recent-first sequence order over arena-linked slots
//! - Comparator-driven, stable merge sort of the linked sequence
//! - Flat-file save/load, one whitespace-separated line per record
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Shell (line commands)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RecordStore │◄─────────│   Persist   │
//!   │ index+chain │  insert  │ export/load │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ Merge sort  │
//!   │  (Linked)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod sort;
pub mod store;
pub mod persist;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::{Config, DuplicatePolicy};
pub use record::{Record, RecordId, RecordUpdate};
pub use sort::SortKey;
pub use store::{RecordStore, SharedStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rosterdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
