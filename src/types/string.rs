use std::cmp::Ordering;

use crate::buffer::{ReadCursor, WriteBuffer};
use crate::error::{Error, Result};
use crate::types::{DataType, Value};

/// UTF-8 strings: `[varint byte_len][bytes]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl DataType for StringType {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        match (a, b) {
            (Value::Str(x), Value::Str(y)) => x.cmp(y),
            _ => a.natural_cmp(b),
        }
    }

    fn memory(&self, value: &Value) -> usize {
        value.approximate_memory()
    }

    fn read(&self, cursor: &mut ReadCursor<'_>) -> Result<Value> {
        let bytes = read_len_prefixed(cursor)?;
        let s = std::str::from_utf8(bytes)
            .map_err(|e| Error::Corruption(format!("invalid utf8 in string: {e}")))?;
        Ok(Value::Str(s.to_owned()))
    }

    fn write(&self, sink: &mut WriteBuffer, value: &Value) -> Result<()> {
        match value {
            Value::Str(s) => {
                write_len_prefixed(sink, s.as_bytes());
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                expected: "string",
                found: other.kind(),
            }),
        }
    }
}

/// Opaque byte strings: `[varint len][bytes]`, ordered lexicographically.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesType;

impl DataType for BytesType {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        match (a, b) {
            (Value::Bytes(x), Value::Bytes(y)) => x.cmp(y),
            _ => a.natural_cmp(b),
        }
    }

    fn memory(&self, value: &Value) -> usize {
        value.approximate_memory()
    }

    fn read(&self, cursor: &mut ReadCursor<'_>) -> Result<Value> {
        Ok(Value::Bytes(read_len_prefixed(cursor)?.to_vec()))
    }

    fn write(&self, sink: &mut WriteBuffer, value: &Value) -> Result<()> {
        match value {
            Value::Bytes(b) => {
                write_len_prefixed(sink, b);
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                expected: "bytes",
                found: other.kind(),
            }),
        }
    }
}

fn write_len_prefixed(sink: &mut WriteBuffer, data: &[u8]) {
    sink.put_var_u64(data.len() as u64).put_slice(data);
}

fn read_len_prefixed<'a>(cursor: &mut ReadCursor<'a>) -> Result<&'a [u8]> {
    let len = cursor.get_var_u64()?;
    let len = usize::try_from(len)
        .map_err(|_| Error::Corruption(format!("length {len} does not fit in memory")))?;
    cursor.get_slice(len)
}
