pub mod primitive;
pub mod row;
pub mod string;
pub mod value;

use std::cmp::Ordering;
use std::fmt;

use crate::buffer::{ReadCursor, WriteBuffer};
use crate::error::{Error, Result};

pub use primitive::{IntType, LongType};
pub use row::RowType;
pub use string::{BytesType, StringType};
pub use value::{Row, Value};

/// The contract every storable column type implements.
///
/// The page serializer calls `write`/`read` once per stored value, tree
/// search calls `compare`, and the cache calls `memory` when it accounts
/// for resident pages. Implementations carry no mutable state, so one
/// instance is shared by every reader and writer of a map.
///
/// Object safe: heterogeneous schemas are `Vec<Arc<dyn DataType>>`.
pub trait DataType: fmt::Debug + Send + Sync {
    /// Total order over the values this type stores.
    ///
    /// Must return `Equal` for reference-identical inputs without looking
    /// at their contents.
    fn compare(&self, a: &Value, b: &Value) -> Ordering;

    /// Retained-size estimate for cache eviction.
    ///
    /// Same value ⇒ same estimate. Never zero for a leaf value.
    fn memory(&self, value: &Value) -> usize;

    /// Decode exactly the bytes a matching `write` produced.
    fn read(&self, cursor: &mut ReadCursor<'_>) -> Result<Value>;

    /// Append the canonical encoding of `value`.
    fn write(&self, sink: &mut WriteBuffer, value: &Value) -> Result<()>;

    /// Allocate `size` independent slots, all empty.
    fn create_storage(&self, size: usize) -> Vec<Option<Value>> {
        vec![None; size]
    }

    /// Write the first `len` slots of `storage` in order.
    fn write_all(&self, sink: &mut WriteBuffer, storage: &[Option<Value>], len: usize) -> Result<()> {
        let slots = storage
            .get(..len)
            .ok_or_else(|| Error::Corruption(format!("{len} slots requested, {} allocated", storage.len())))?;
        for (i, slot) in slots.iter().enumerate() {
            let value = slot
                .as_ref()
                .ok_or_else(|| Error::Corruption(format!("slot {i} is empty")))?;
            self.write(sink, value)?;
        }
        Ok(())
    }

    /// Fill the first `len` slots of `storage` from `cursor`.
    fn read_all(&self, cursor: &mut ReadCursor<'_>, storage: &mut [Option<Value>], len: usize) -> Result<()> {
        let allocated = storage.len();
        let slots = storage
            .get_mut(..len)
            .ok_or_else(|| Error::Corruption(format!("{len} slots requested, {allocated} allocated")))?;
        for slot in slots {
            *slot = Some(self.read(cursor)?);
        }
        Ok(())
    }

    /// Search the first `len` sorted slots of `storage` for `key`.
    ///
    /// Same shape as `slice::binary_search`: `Ok(index)` on a hit,
    /// `Err(insertion_point)` otherwise. `initial_guess` is probed first
    /// when it is in range, since callers usually land near their last hit.
    /// An empty slot sorts before every value.
    fn binary_search(
        &self,
        key: &Value,
        storage: &[Option<Value>],
        len: usize,
        initial_guess: usize,
    ) -> std::result::Result<usize, usize> {
        let len = len.min(storage.len());
        let mut low = 0;
        let mut high = len;
        let mut probe = if initial_guess < len { initial_guess } else { len / 2 };
        while low < high {
            let ord = match &storage[probe] {
                Some(existing) => self.compare(key, existing),
                None => Ordering::Greater,
            };
            match ord {
                Ordering::Greater => low = probe + 1,
                Ordering::Less => high = probe,
                Ordering::Equal => return Ok(probe),
            }
            probe = low + (high - low) / 2;
        }
        Err(low)
    }
}
