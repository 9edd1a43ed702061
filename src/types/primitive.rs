use std::cmp::Ordering;

use crate::buffer::{ReadCursor, WriteBuffer};
use crate::error::{Error, Result};
use crate::types::{DataType, Value};

/// 32-bit signed integers, stored as the varint of their bit pattern.
///
/// Small non-negative values take one byte; negative values always take
/// five, since their high bits are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntType;

impl DataType for IntType {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        match (a, b) {
            (Value::Int(x), Value::Int(y)) => x.cmp(y),
            _ => a.natural_cmp(b),
        }
    }

    fn memory(&self, value: &Value) -> usize {
        value.approximate_memory()
    }

    fn read(&self, cursor: &mut ReadCursor<'_>) -> Result<Value> {
        Ok(Value::Int(cursor.get_var_u32()? as i32))
    }

    fn write(&self, sink: &mut WriteBuffer, value: &Value) -> Result<()> {
        match value {
            Value::Int(v) => {
                sink.put_var_u32(*v as u32);
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                expected: "int",
                found: other.kind(),
            }),
        }
    }
}

/// 64-bit signed integers, stored as the varint of their bit pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongType;

impl DataType for LongType {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        match (a, b) {
            (Value::Long(x), Value::Long(y)) => x.cmp(y),
            _ => a.natural_cmp(b),
        }
    }

    fn memory(&self, value: &Value) -> usize {
        value.approximate_memory()
    }

    fn read(&self, cursor: &mut ReadCursor<'_>) -> Result<Value> {
        Ok(Value::Long(cursor.get_var_u64()? as i64))
    }

    fn write(&self, sink: &mut WriteBuffer, value: &Value) -> Result<()> {
        match value {
            Value::Long(v) => {
                sink.put_var_u64(*v as u64);
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                expected: "long",
                found: other.kind(),
            }),
        }
    }
}
