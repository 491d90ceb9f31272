//! Store Module
//!
//! The record container: a linked sequence paired with an identifier index.
//!
//! ## Responsibilities
//! - Prepend on insert (most-recent-first sequence order)
//! - O(1) lookup by identifier through the index
//! - Unlink-and-release on delete, keeping index and sequence in step
//! - In-place merge sort of the sequence by any record predicate
//!
//! ## Layout
//! ```text
//!   index: HashMap<RecordId, Handle>
//!            │        │
//!            ▼        ▼
//!   arena: [ slot 0 ][ slot 1 ][ free ][ slot 3 ]
//!             │  ▲      │                 ▲
//!   head ─────┼──┘      └─────────────────┘
//!             └──► next ... (singly linked through the slots)
//! ```
//!
//! Records live in arena slots addressed by integer handles; the sequence is
//! the chain of `next` handles starting at `head`. Freed slots are reused.

mod arena;
mod shared;
mod table;

pub use shared::SharedStore;
pub use table::{Iter, RecordStore};
