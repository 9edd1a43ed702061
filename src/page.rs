use std::sync::Arc;

use tracing::{debug, warn};

use crate::buffer::{ReadCursor, WriteBuffer};
use crate::error::{Error, Result};
use crate::types::{DataType, Value};

const CRC_SIZE: usize = 4;

/// Sizing knobs for a `ValuePage`.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Number of key slots allocated per page.
    pub capacity: usize,
    /// Initial capacity of the buffer `encode` writes into.
    pub buffer_capacity: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            capacity: 48,
            buffer_capacity: 1024,
        }
    }
}

/// One page worth of sorted keys, held in storage from `create_storage`.
///
/// All ordering goes through the key type's `compare`, and `memory` is
/// kept equal to the sum of the resident keys' `memory` estimates so the
/// cache can charge the page without rescanning it.
///
/// Serialized form:
/// ```text
/// ┌────────────────┬───────┬───────┬─────┬────────────────┐
/// │ count (varint) │ key 0 │ key 1 │ ... │ CRC32 (4B, BE) │
/// └────────────────┴───────┴───────┴─────┴────────────────┘
/// ```
/// The CRC covers everything before it and is checked before any key is
/// decoded, so the value codecs never see corrupted bytes.
#[derive(Debug)]
pub struct ValuePage {
    key_type: Arc<dyn DataType>,
    keys: Vec<Option<Value>>,
    len: usize,
    memory: usize,
    last_index: usize,
    options: PageOptions,
}

impl ValuePage {
    pub fn new(key_type: Arc<dyn DataType>, options: PageOptions) -> Self {
        let keys = key_type.create_storage(options.capacity);
        ValuePage {
            key_type,
            keys,
            len: 0,
            memory: 0,
            last_index: 0,
            options,
        }
    }

    /// Insert `key`, replacing an equal key if present.
    ///
    /// Returns true if the key is new. Fails with `PageFull` only when a
    /// new key would need a slot the page doesn't have.
    pub fn insert(&mut self, key: Value) -> Result<bool> {
        let key_memory = self.key_type.memory(&key);
        match self.search(&key) {
            Ok(i) => {
                if let Some(old) = self.keys[i].replace(key) {
                    self.memory -= self.key_type.memory(&old);
                }
                self.memory += key_memory;
                self.last_index = i;
                Ok(false)
            }
            Err(i) => {
                if self.is_full() {
                    return Err(Error::PageFull {
                        capacity: self.capacity(),
                    });
                }
                // Slot `len` is empty; rotating it down opens a hole at `i`.
                self.keys[i..=self.len].rotate_right(1);
                self.keys[i] = Some(key);
                self.len += 1;
                self.memory += key_memory;
                self.last_index = i;
                Ok(true)
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        let i = self.search(key).ok()?;
        self.keys[i].as_ref()
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let i = self.search(key).ok()?;
        let removed = self.keys[i].take()?;
        self.keys[i..self.len].rotate_left(1);
        self.len -= 1;
        self.memory -= self.key_type.memory(&removed);
        self.last_index = i.min(self.len.saturating_sub(1));
        Some(removed)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.keys[..self.len].iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Sum of the resident keys' estimates.
    pub fn memory(&self) -> usize {
        self.memory
    }

    pub fn key_type(&self) -> &Arc<dyn DataType> {
        &self.key_type
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = WriteBuffer::with_capacity(self.options.buffer_capacity);
        buf.put_var_u64(self.len as u64);
        self.key_type.write_all(&mut buf, &self.keys, self.len)?;
        let crc = crc32fast::hash(buf.as_slice());
        buf.put_u32(crc);
        debug!(keys = self.len, bytes = buf.len(), "page encoded");
        Ok(buf.into_vec())
    }

    pub fn decode(key_type: Arc<dyn DataType>, data: &[u8], options: PageOptions) -> Result<Self> {
        if data.len() < CRC_SIZE {
            return Err(Error::Corruption("page too short".into()));
        }
        let (payload, trailer) = data.split_at(data.len() - CRC_SIZE);
        let stored_crc = ReadCursor::new(trailer).get_u32()?;
        let computed_crc = crc32fast::hash(payload);
        if stored_crc != computed_crc {
            warn!(stored_crc, computed_crc, "page checksum mismatch");
            return Err(Error::Corruption("CRC mismatch".into()));
        }

        let mut cursor = ReadCursor::new(payload);
        let count = cursor.get_var_u64()?;
        // Every encoded key takes at least one byte.
        let count = usize::try_from(count)
            .ok()
            .filter(|&n| n <= cursor.remaining())
            .ok_or_else(|| Error::Corruption(format!("page count {count} exceeds payload")))?;

        let mut keys = key_type.create_storage(options.capacity.max(count));
        key_type.read_all(&mut cursor, &mut keys, count)?;
        if !cursor.is_exhausted() {
            return Err(Error::Corruption(format!(
                "{} trailing bytes after {count} keys",
                cursor.remaining()
            )));
        }
        let memory = keys.iter().flatten().map(|k| key_type.memory(k)).sum();
        debug!(keys = count, bytes = data.len(), "page decoded");

        Ok(ValuePage {
            key_type,
            keys,
            len: count,
            memory,
            last_index: 0,
            options,
        })
    }

    fn search(&self, key: &Value) -> std::result::Result<usize, usize> {
        self.key_type
            .binary_search(key, &self.keys, self.len, self.last_index)
    }
}
