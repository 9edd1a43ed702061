use crate::error::{Error, Result};
use crate::varint;

/// Read position over an encoded byte slice.
///
/// The decode-side twin of `WriteBuffer`. Every getter either consumes
/// exactly the bytes it returns or fails with `Error::Eof` and leaves the
/// position where it was, so a truncated value never yields a partial read.
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ReadCursor { data, pos: 0 }
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        let byte = *self.data.get(self.pos).ok_or(Error::Eof)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a big-endian `u32`.
    pub fn get_u32(&mut self) -> Result<u32> {
        let bytes = self.get_array::<4>()?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Read a big-endian `u64`.
    pub fn get_u64(&mut self) -> Result<u64> {
        let bytes = self.get_array::<8>()?;
        Ok(u64::from_be_bytes(bytes))
    }

    /// Borrow the next `len` bytes.
    pub fn get_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).ok_or(Error::Eof)?;
        let slice = self.data.get(self.pos..end).ok_or(Error::Eof)?;
        self.pos = end;
        Ok(slice)
    }

    pub fn get_var_u32(&mut self) -> Result<u32> {
        let (value, consumed) = varint::decode_u32(self.rest())?;
        self.pos += consumed;
        Ok(value)
    }

    pub fn get_var_u64(&mut self) -> Result<u64> {
        let (value, consumed) = varint::decode_u64(self.rest())?;
        self.pos += consumed;
        Ok(value)
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    fn get_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let slice = self.get_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }
}
