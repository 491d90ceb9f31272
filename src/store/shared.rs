//! Shared store for concurrent callers
//!
//! The sequence and the index must change together, so every operation
//! takes one lock around the whole store.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::record::{Record, RecordId, RecordUpdate};
use crate::sort::SortKey;

use super::RecordStore;

/// Cloneable handle to a store behind a single mutex
///
/// Reads return owned copies since references cannot outlive the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<RecordStore>>,
}

impl SharedStore {
    /// Wrap an existing store
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn insert(&self, record: Record) -> Option<Record> {
        self.inner.lock().insert(record)
    }

    pub fn delete(&self, id: RecordId) -> Option<Record> {
        self.inner.lock().delete(id)
    }

    pub fn search(&self, id: RecordId) -> Option<Record> {
        self.inner.lock().search(id).cloned()
    }

    pub fn update(&self, id: RecordId, update: RecordUpdate) -> bool {
        self.inner.lock().update(id, update)
    }

    pub fn sort(&self, key: SortKey) {
        self.inner.lock().sort(key)
    }

    pub fn sort_by<F>(&self, less: F)
    where
        F: Fn(&Record, &Record) -> bool,
    {
        self.inner.lock().sort_by(less)
    }

    /// Copy of every record in sequence order
    pub fn snapshot(&self) -> Vec<Record> {
        self.inner.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut RecordStore) -> R) -> R {
        let mut store = self.inner.lock();
        f(&mut store)
    }

    /// Take the store back if this is the last handle
    pub fn try_into_inner(self) -> Result<RecordStore, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }
}
