//! Persistence Module
//!
//! Flat-file export/import of whole records.
//!
//! ## File Format
//! ```text
//! ┌──────┬────┬────────────┬─────────┬───────┐
//! │ name │ id │ department │ section │ score │   one line per record,
//! └──────┴────┴────────────┴─────────┴───────┘   single-space separated
//! ```
//!
//! - Lines are written in the store's current sequence order.
//! - Import reads the file as a whitespace token stream, five tokens per
//!   record, and calls `insert` for each. The first incomplete or
//!   unparsable group ends the import without an error.
//! - Fields containing whitespace cannot be read back as written. Export
//!   warns about them but does not alter them.
//! - Failing to open the file is `ResourceUnavailable`; the store is left
//!   untouched.

mod reader;
mod writer;

pub use reader::{import, load_from_path};
pub use writer::{export, format_record, save_to_path};

/// Number of whitespace-separated fields per record
pub const FIELDS_PER_RECORD: usize = 5;
