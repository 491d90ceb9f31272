//! SharedStore Tests
//!
//! Tests verify:
//! - Operations through the shared handle
//! - Concurrent writers keep index and sequence consistent

use rosterdb::{Record, RecordStore, RecordUpdate, SharedStore, SortKey};

#[test]
fn test_shared_basic_operations() {
    let shared = SharedStore::default();

    shared.insert(Record::new("Alice", 1, "CS", "A", 3.8));
    shared.insert(Record::new("Bob", 2, "CS", "B", 3.2));

    assert_eq!(shared.len(), 2);
    assert_eq!(shared.search(1).map(|r| r.name), Some("Alice".to_string()));

    assert!(shared.update(2, RecordUpdate::new("Robert", "CS", "B", 3.3)));
    assert_eq!(shared.search(2).map(|r| r.score), Some(3.3));

    assert!(shared.delete(1).is_some());
    assert_eq!(shared.search(1), None);
    assert!(!shared.is_empty());
}

#[test]
fn test_shared_sort_and_snapshot() {
    let shared = SharedStore::new(RecordStore::new());
    shared.insert(Record::new("Alice", 1, "CS", "A", 3.8));
    shared.insert(Record::new("Bob", 2, "CS", "B", 3.2));
    shared.insert(Record::new("Carol", 3, "EE", "A", 3.9));

    shared.sort(SortKey::Score);
    let ids: Vec<i32> = shared.snapshot().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);

    shared.sort_by(|a, b| a.id > b.id);
    let ids: Vec<i32> = shared.snapshot().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_concurrent_inserts_and_deletes() {
    let shared = SharedStore::default();

    crossbeam::scope(|s| {
        for t in 0..4 {
            let store = shared.clone();
            s.spawn(move |_| {
                for i in 0..100 {
                    let id = t * 1000 + i;
                    store.insert(Record::new(format!("s{}", id), id, "CS", "A", i as f32));
                    if i % 2 == 0 {
                        store.delete(id);
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(shared.len(), 200);

    shared.with(|store| {
        for record in store.iter() {
            assert_eq!(record.id % 2, 1);
            assert_eq!(store.search(record.id), Some(record));
        }
    });

    let store = shared.try_into_inner().unwrap();
    assert_eq!(store.len(), 200);
}

#[test]
fn test_try_into_inner_with_outstanding_handle() {
    let shared = SharedStore::default();
    let other = shared.clone();

    let shared = shared.try_into_inner().unwrap_err();
    drop(other);

    assert!(shared.try_into_inner().is_ok());
}
