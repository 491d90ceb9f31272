//! RecordStore implementation
//!
//! Arena-linked sequence plus a HashMap index.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::config::{Config, DuplicatePolicy};
use crate::record::{Record, RecordId, RecordUpdate};
use crate::sort::{merge_sort, Linked, SortKey};

use super::arena::{Arena, Handle};

/// In-memory record container
///
/// ## Invariants
/// - Every handle in `index` is reachable from `head`
/// - Under [`DuplicatePolicy::Upsert`] every sequence entry is indexed
/// - Under [`DuplicatePolicy::Shadow`] older entries for a repeated
///   identifier stay in the sequence without an index entry
pub struct RecordStore {
    /// Record slots and their successor links
    arena: Arena,

    /// First record in sequence order
    head: Option<Handle>,

    /// Identifier → handle of the most recently inserted record
    index: HashMap<RecordId, Handle>,

    policy: DuplicatePolicy,
}

impl RecordStore {
    /// Create an empty store with the default (upsert) policy
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty store with the given duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            index: HashMap::new(),
            policy,
        }
    }

    /// Create an empty store configured from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(config.duplicate_policy)
    }

    /// Insert a record at the head of the sequence
    ///
    /// Under `Upsert` an existing record with the same identifier is removed
    /// first and returned. Under `Shadow` nothing is removed and `None` is
    /// returned.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        let id = record.id;

        let policy = self.policy;
        let displaced = match policy {
            DuplicatePolicy::Upsert if self.index.contains_key(&id) => self.delete(id),
            _ => None,
        };

        let handle = self.arena.alloc(record, self.head);
        self.head = Some(handle);
        self.index.insert(id, handle);

        debug!(id, replaced = displaced.is_some(), "inserted record");
        displaced
    }

    /// Remove the first record in sequence order with this identifier
    ///
    /// Returns `None` (and changes nothing) when the identifier is absent.
    pub fn delete(&mut self, id: RecordId) -> Option<Record> {
        let handle = self.unlink_first(|r| r.id == id)?;
        self.index.remove(&id);

        let record = self.arena.release(handle);
        debug!(id, "deleted record");
        record
    }

    /// Look up a record by identifier
    pub fn search(&self, id: RecordId) -> Option<&Record> {
        let handle = *self.index.get(&id)?;
        self.arena.get(handle)
    }

    /// Overwrite every field except the identifier
    ///
    /// Returns `false` (and changes nothing) when the identifier is absent.
    pub fn update(&mut self, id: RecordId, update: RecordUpdate) -> bool {
        let Some(&handle) = self.index.get(&id) else {
            return false;
        };

        match self.arena.get_mut(handle) {
            Some(record) => {
                record.apply(update);
                debug!(id, "updated record");
                true
            }
            None => false,
        }
    }

    /// Whether an identifier is reachable through the index
    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate records in sequence order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
            remaining: self.arena.len(),
        }
    }

    /// Reorder the sequence by a strict "less-than" predicate
    ///
    /// Merge sort over the linked slots. Equal elements keep their relative
    /// order. The index is untouched.
    pub fn sort_by<F>(&mut self, less: F)
    where
        F: Fn(&Record, &Record) -> bool,
    {
        self.head = merge_sort(&mut self.arena, self.head, &less);
    }

    /// Reorder the sequence by a named order
    pub fn sort(&mut self, key: SortKey) {
        self.sort_by(key.less());
        debug!(%key, len = self.len(), "sorted records");
    }

    /// Number of records in the sequence
    ///
    /// Shadowed duplicates count, so this can exceed the number of
    /// searchable identifiers.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.head = None;
    }

    /// Active duplicate identifier policy
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Unlink the first matching slot from the chain, fixing the predecessor
    /// link or moving the head. The slot itself is not released.
    fn unlink_first<P>(&mut self, matches: P) -> Option<Handle>
    where
        P: Fn(&Record) -> bool,
    {
        let mut prev: Option<Handle> = None;
        let mut cursor = self.head;

        while let Some(handle) = cursor {
            let next = self.arena.next(handle);

            if matches(self.arena.item(handle)) {
                match prev {
                    Some(p) => self.arena.set_next(p, next),
                    None => self.head = next,
                }
                return Some(handle);
            }

            prev = Some(handle);
            cursor = next;
        }

        None
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("policy", &self.policy)
            .field("records", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl Extend<Record> for RecordStore {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a store in sequence order
pub struct Iter<'a> {
    arena: &'a Arena,
    cursor: Option<Handle>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        self.cursor = self.arena.next(handle);
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.arena.item(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
