//! Slot arena backing the linked record sequence

use crate::record::Record;
use crate::sort::Linked;

/// Stable address of a record inside the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

/// One occupied slot: the record plus its successor link
#[derive(Debug)]
struct Slot {
    record: Record,
    next: Option<Handle>,
}

/// Vector of slots with a free list
#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Option<Slot>>,
    /// Released slot positions, reused before growing
    free: Vec<usize>,
    /// Number of occupied slots
    live: usize,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record and return its handle
    pub fn alloc(&mut self, record: Record, next: Option<Handle>) -> Handle {
        let slot = Some(Slot { record, next });
        self.live += 1;

        match self.free.pop() {
            Some(pos) => {
                self.slots[pos] = slot;
                Handle(pos)
            }
            None => {
                self.slots.push(slot);
                Handle(self.slots.len() - 1)
            }
        }
    }

    /// Release a slot, returning its record
    pub fn release(&mut self, handle: Handle) -> Option<Record> {
        let slot = self.slots.get_mut(handle.0)?.take()?;
        self.free.push(handle.0);
        self.live -= 1;
        Some(slot.record)
    }

    /// Record at `handle`, if the slot is occupied
    pub fn get(&self, handle: Handle) -> Option<&Record> {
        self.slot(handle).map(|s| &s.record)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Record> {
        self.slots
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .map(|s| &mut s.record)
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    fn slot(&self, handle: Handle) -> Option<&Slot> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    /// Occupied slot or panic. Handles reachable from the sequence head are
    /// always occupied.
    fn occupied(&self, handle: Handle) -> &Slot {
        match self.slot(handle) {
            Some(slot) => slot,
            None => panic!("dangling record handle {}", handle.0),
        }
    }
}

impl Linked for Arena {
    type Node = Handle;
    type Item = Record;

    fn item(&self, node: Handle) -> &Record {
        &self.occupied(node).record
    }

    fn next(&self, node: Handle) -> Option<Handle> {
        self.occupied(node).next
    }

    fn set_next(&mut self, node: Handle, next: Option<Handle>) {
        match self.slots.get_mut(node.0).and_then(Option::as_mut) {
            Some(slot) => slot.next = next,
            None => panic!("dangling record handle {}", node.0),
        }
    }
}
