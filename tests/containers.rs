use cinegraph::error::EngineError;
use cinegraph::primitives::{BucketKey, IndexedStore, Queue, Sequence};

#[test]
fn store_tracks_key_order_across_mixed_operations() {
    let mut store: IndexedStore<i64, String> = IndexedStore::with_capacity(8);
    let mut successful = 0;

    for key in [3i64, -14, 7, 3, 0, -14, 21] {
        if store.put(key, format!("value-{key}")) {
            successful += 1;
        }
        assert_eq!(store.get(key), Some(&format!("value-{key}")));
    }

    assert_eq!(store.len(), successful);
    let keys: Vec<i64> = store.keys().copied().collect();
    assert_eq!(keys, vec![3, -14, 7, 0, 21]);
    assert_eq!(keys.len(), successful);

    assert!(store.remove(-14));
    assert!(store.replace(7, "replaced".into()));
    let keys: Vec<i64> = store.keys().copied().collect();
    assert_eq!(keys, vec![3, 7, 0, 21]);
    assert_eq!(store.get(7), Some(&"replaced".to_string()));
}

#[test]
fn store_survives_heavy_chaining() {
    // Two buckets force long chains; behavior must not depend on spread.
    let mut store: IndexedStore<i64, i64> = IndexedStore::with_capacity(2);
    for key in -50i64..50 {
        assert!(store.put(key, key * 2));
    }
    assert_eq!(store.len(), 100);
    for key in -50i64..50 {
        assert_eq!(store.get(key), Some(&(key * 2)));
    }
    for key in (-50i64..50).step_by(2) {
        assert!(store.remove(key));
    }
    assert_eq!(store.len(), 50);
    assert_eq!(store.keys().count(), 50);
}

#[test]
fn negative_and_extreme_keys_stay_addressable() {
    for capacity in [1usize, 3, 17] {
        let mut store: IndexedStore<i64, &str> = IndexedStore::with_capacity(capacity);
        for key in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            assert!(key.bucket(capacity) < capacity);
            assert!(store.put(key, "present"));
        }
        for key in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            assert!(store.contains_key(key), "capacity {capacity} key {key}");
        }
    }
}

#[test]
fn sequence_round_trips_through_queue() {
    let mut queue = Queue::new();
    for value in 0..100 {
        queue.enqueue(value);
    }
    let mut drained = Vec::new();
    while let Some(value) = queue.dequeue() {
        drained.push(value);
    }
    assert_eq!(drained, (0..100).collect::<Vec<i32>>());
}

#[test]
fn sequence_reverse_and_removal_compose() {
    let mut seq: Sequence<i32> = (0..10).collect();
    seq.reverse();
    assert!(seq.remove(&9)); // old tail is now the head
    assert!(seq.remove(&0)); // old head is now the tail
    let values: Vec<i32> = seq.iter().copied().collect();
    assert_eq!(values, vec![8, 7, 6, 5, 4, 3, 2, 1]);

    seq.reverse();
    let values: Vec<i32> = seq.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn empty_sequence_access_is_a_typed_error() {
    let seq: Sequence<u8> = Sequence::new();
    match seq.head() {
        Err(EngineError::EmptyAccess(what)) => assert_eq!(what, "sequence head"),
        other => panic!("expected EmptyAccess, got {other:?}"),
    }
    assert!(matches!(
        seq.tail(),
        Err(EngineError::EmptyAccess("sequence tail"))
    ));
}
