// Row type concurrent access tests
// One RowType per map, shared read-only by every thread touching that map.

use std::cmp::Ordering;
use std::sync::Arc;
use std::thread;

use mvtype::{DataType, IntType, ReadCursor, RowType, StringType, Value, WriteBuffer, row};

// =============================================================================
// Test 1: Many threads encode, decode and compare through one instance
// =============================================================================
#[test]
fn shared_row_type_across_threads() {
    let rt = Arc::new(RowType::new(vec![Arc::new(IntType), Arc::new(StringType)]));

    let mut handles = vec![];
    for t in 0..8 {
        let rt = Arc::clone(&rt);
        handles.push(thread::spawn(move || {
            let mut sink = WriteBuffer::new();
            for i in 0..200 {
                let original = Value::Row(row![t * 1000 + i, format!("thread{t}-{i}")]);
                sink.clear();
                rt.write(&mut sink, &original).unwrap();

                let mut cursor = ReadCursor::new(sink.as_slice());
                let decoded = rt.read(&mut cursor).unwrap();
                assert_eq!(rt.compare(&decoded, &original), Ordering::Equal);
                assert_eq!(rt.memory(&decoded), rt.memory(&original));
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }
}

// =============================================================================
// Test 2: Readers agree on ordering
// =============================================================================
#[test]
fn concurrent_compares_agree() {
    let rt = Arc::new(RowType::new(vec![Arc::new(IntType), Arc::new(IntType)]));
    let low = Value::Row(row![1]);
    let high = Value::Row(row![1, 0]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rt = Arc::clone(&rt);
            let (low, high) = (low.clone(), high.clone());
            thread::spawn(move || (0..1000).all(|_| rt.compare(&low, &high) == Ordering::Less))
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}
