//! Sort Module
//!
//! Comparator-driven merge sort over singly-linked sequences.
//!
//! ## Responsibilities
//! - Top-down merge sort that only relinks nodes (no auxiliary sequence)
//! - Stable merge: on ties the left partition wins
//! - Named record orders (score, name, identifier)
//!
//! ## Algorithm
//! ```text
//!   head ─► a ─► b ─► c ─► d ─► e
//!                 ▲
//!        slow/fast split: middle = c (first middle for even lengths)
//!
//!   sort(a..c)   sort(d..e)
//!        └────┬─────┘
//!           merge (left-first on ties)
//! ```
//!
//! The list is abstracted by [`Linked`] so the same routine sorts the record
//! arena and a plain slice (see [`sort_indices`]).

mod merge;
mod order;

pub use merge::{merge_sort, sort_indices};
pub use order::{by_id, by_name, by_score, SortKey};

/// A singly-linked sequence whose nodes are addressed by copyable handles
pub trait Linked {
    /// Handle addressing one node
    type Node: Copy;

    /// Payload compared by the sort predicate
    type Item;

    /// Payload stored at `node`
    fn item(&self, node: Self::Node) -> &Self::Item;

    /// Successor of `node`, or `None` at the tail
    fn next(&self, node: Self::Node) -> Option<Self::Node>;

    /// Relink the successor of `node`
    fn set_next(&mut self, node: Self::Node, next: Option<Self::Node>);
}
