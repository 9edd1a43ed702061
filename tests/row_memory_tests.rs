// Row memory accounting and storage tests
// Size estimates feed cache eviction; storage slots hold one page of values.

use std::sync::Arc;

use mvtype::{DataType, IntType, LongType, RowType, StringType, Value, row};

fn int_string_long() -> RowType {
    RowType::new(vec![Arc::new(IntType), Arc::new(StringType), Arc::new(LongType)])
}

// =============================================================================
// Test 1: Empty row costs nothing
// =============================================================================
#[test]
fn empty_row_memory_is_zero() {
    let rt = int_string_long();
    assert_eq!(rt.memory(&Value::Row(row![])), 0);
}

// =============================================================================
// Test 2: Row estimate is the sum of its columns
// =============================================================================
#[test]
fn row_memory_is_sum_of_columns() {
    let rt = int_string_long();
    let r = row![1, "hello", 2i64];
    let expected = IntType.memory(&r[0]) + StringType.memory(&r[1]) + LongType.memory(&r[2]);
    assert_eq!(rt.memory(&Value::Row(r)), expected);
}

// =============================================================================
// Test 3: Estimates are deterministic
// =============================================================================
#[test]
fn memory_is_stable_across_calls() {
    let rt = int_string_long();
    let v = Value::Row(row![9, "stable", -1i64]);
    let first = rt.memory(&v);
    for _ in 0..10 {
        assert_eq!(rt.memory(&v), first);
    }
    assert_eq!(rt.memory(&v.clone()), first);
}

// =============================================================================
// Test 4: Leaf estimates are never zero
// =============================================================================
#[test]
fn leaf_values_have_positive_memory() {
    assert!(IntType.memory(&Value::Int(0)) > 0);
    assert!(LongType.memory(&Value::Long(0)) > 0);
    assert!(StringType.memory(&Value::Str(String::new())) > 0);
}

// =============================================================================
// Test 5: Prefix rows cost less than the full row
// =============================================================================
// Adding a column never lowers the estimate.
#[test]
fn memory_grows_with_arity() {
    let rt = int_string_long();
    let one = rt.memory(&Value::Row(row![1]));
    let two = rt.memory(&Value::Row(row![1, "x"]));
    let three = rt.memory(&Value::Row(row![1, "x", 3i64]));
    assert!(one < two && two < three);
}

// =============================================================================
// Test 6: Storage slots start empty
// =============================================================================
#[test]
fn storage_starts_absent() {
    let rt = int_string_long();
    let storage = rt.create_storage(4);
    assert_eq!(storage.len(), 4);
    assert!(storage.iter().all(Option::is_none));
}

// =============================================================================
// Test 7: Storage slots are independent
// =============================================================================
// Writing slot 0 must leave slots 1..4 untouched.
#[test]
fn storage_slots_are_isolated() {
    let rt = int_string_long();
    let mut storage = rt.create_storage(4);
    storage[0] = Some(Value::Row(row![1, "a"]));

    assert!(storage[0].is_some());
    assert!(storage[1..].iter().all(Option::is_none));

    storage[2] = Some(Value::Row(row![2]));
    assert_eq!(storage[0], Some(Value::Row(row![1, "a"])));
    assert!(storage[1].is_none());
    assert!(storage[3].is_none());
}
