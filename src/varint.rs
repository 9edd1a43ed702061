use crate::error::{Error, Result};

/// Maximum encoded width of a `u32`.
pub const MAX_LEN_U32: usize = 5;

/// Maximum encoded width of a `u64`.
pub const MAX_LEN_U64: usize = 10;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7F;

/// Self-delimiting variable-length unsigned integers.
///
/// ```text
/// 7 bits of payload per byte, least-significant group first.
/// High bit set = more bytes follow.
///
///   0      → [0x00]
///   127    → [0x7F]
///   128    → [0x80 0x01]
///   300    → [0xAC 0x02]
///   u32::MAX → [0xFF 0xFF 0xFF 0xFF 0x0F]
/// ```
///
/// Values 0..=127 take one byte, which covers nearly every row arity and
/// most string lengths.
pub fn encode_u32(value: u32, out: &mut Vec<u8>) {
    encode_u64(value as u64, out);
}

/// Append the varint encoding of a `u64`.
pub fn encode_u64(mut value: u64, out: &mut Vec<u8>) {
    while value > PAYLOAD as u64 {
        out.push((value as u8 & PAYLOAD) | CONTINUATION);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Number of bytes `encode_u32` will produce.
pub fn encoded_len_u32(value: u32) -> usize {
    encoded_len_u64(value as u64)
}

/// Number of bytes `encode_u64` will produce.
pub fn encoded_len_u64(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Decode a `u32`, returning (value, bytes_consumed).
///
/// Fails with `Eof` when the data ends before a terminating byte and with
/// `Corruption` when the encoding is wider than a `u32` allows.
pub fn decode_u32(data: &[u8]) -> Result<(u32, usize)> {
    let (value, consumed) = decode_bounded(data, MAX_LEN_U32)?;
    let value = u32::try_from(value)
        .map_err(|_| Error::Corruption(format!("varint {value} overflows u32")))?;
    Ok((value, consumed))
}

/// Decode a `u64`, returning (value, bytes_consumed).
pub fn decode_u64(data: &[u8]) -> Result<(u64, usize)> {
    decode_bounded(data, MAX_LEN_U64)
}

fn decode_bounded(data: &[u8], max_len: usize) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in data.iter().enumerate() {
        if i == max_len {
            break;
        }
        let payload = (byte & PAYLOAD) as u64;
        let shift = 7 * i as u32;
        // The last group of a u64 only has one significant bit.
        if shift == 63 && payload > 1 {
            return Err(Error::Corruption("varint overflows u64".into()));
        }
        value |= payload << shift;
        if byte & CONTINUATION == 0 {
            return Ok((value, i + 1));
        }
    }
    if data.len() < max_len {
        Err(Error::Eof)
    } else {
        Err(Error::Corruption(format!(
            "varint longer than {max_len} bytes"
        )))
    }
}
