use crate::varint;

/// Append-only byte sink that column codecs write into.
///
/// One buffer is owned by a single in-flight `write` call at a time; the
/// store reads the bytes out only after every value of a page is written.
///
/// Growth policy: when an append doesn't fit, capacity grows by at least the
/// current capacity (doubling) and never by less than `MIN_GROW`, so a long
/// run of small appends costs amortized O(1) each.
#[derive(Debug, Default, Clone)]
pub struct WriteBuffer {
    buf: Vec<u8>,
}

impl WriteBuffer {
    /// Smallest capacity step taken when the buffer grows.
    pub const MIN_GROW: usize = 256;

    /// Create an empty buffer. Nothing is allocated until the first append.
    pub fn new() -> Self {
        WriteBuffer { buf: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        WriteBuffer {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append the varint encoding of `value`.
    pub fn put_var_u32(&mut self, value: u32) -> &mut Self {
        self.reserve(varint::MAX_LEN_U32);
        varint::encode_u32(value, &mut self.buf);
        self
    }

    /// Append the varint encoding of `value`.
    pub fn put_var_u64(&mut self, value: u64) -> &mut Self {
        self.reserve(varint::MAX_LEN_U64);
        varint::encode_u64(value, &mut self.buf);
        self
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.reserve(1);
        self.buf.push(value);
        self
    }

    /// Append a big-endian `u32`.
    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.put_slice(&value.to_be_bytes())
    }

    /// Append a big-endian `u64`.
    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn put_slice(&mut self, data: &[u8]) -> &mut Self {
        self.reserve(data.len());
        self.buf.extend_from_slice(data);
        self
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Drop the contents but keep the allocation for the next page.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    fn reserve(&mut self, additional: usize) {
        let free = self.buf.capacity() - self.buf.len();
        if free >= additional {
            return;
        }
        let step = additional.max(self.buf.capacity()).max(Self::MIN_GROW);
        self.buf.reserve(step);
    }
}
