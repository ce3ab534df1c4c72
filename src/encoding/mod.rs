//! UTF-16 to UTF-8 encoding into bounded, null-terminated buffers
//!
//! Key names arrive as UTF-16 code units and are handed to the SMC layer as
//! 8-bit bytes. The encoder works on Basic Multilingual Plane units only:
//! surrogates are not paired, each unit expands to at most three bytes.
//! Two-byte sequences carry only four bits in the lead byte, so output for
//! U+0400..U+07FF differs from standard UTF-8.
//!
//! The output buffer is sized up front at `3 * count + 1` bytes so that the
//! worst case plus the terminator always fits. The bounds checks in the
//! write and read paths are still enforced and surface as typed errors.
//!
//! # Examples
//!
//! ```
//! use smc_reader::encoding;
//!
//! let units: Vec<u16> = "TC0P".encode_utf16().collect();
//! let encoded = encoding::encode(&units).unwrap();
//! assert_eq!(encoded.as_bytes(), b"TC0P");
//! assert_eq!(encoded.as_bytes_with_nul(), b"TC0P\0");
//! ```

use tracing::trace;

use crate::error::{Error, Result};

/// Worst-case UTF-8 bytes produced by a single BMP code unit
pub const MAX_BYTES_PER_UNIT: usize = 3;

/// Output capacity required for `count` code units, terminator included
pub const fn required_capacity(count: usize) -> usize {
    count * MAX_BYTES_PER_UNIT + 1
}

/// A null-terminated UTF-8 buffer produced by [`encode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBuffer {
    buf: Vec<u8>,
    len: usize,
}

impl EncodedBuffer {
    /// Encoded bytes without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Encoded bytes including the terminating zero
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Number of encoded bytes, terminator excluded
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the allocation backing this buffer
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The full allocation, including the zero padding after the terminator
    pub fn as_raw(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.truncate(self.len);
        self.buf
    }
}

/// Cursor that refuses to touch the last byte of its buffer
struct BoundedWriter<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl<'a> BoundedWriter<'a> {
    fn new(out: &'a mut [u8]) -> Self {
        Self { out, pos: 0 }
    }

    fn push(&mut self, byte: u8) -> Result<()> {
        // The final slot is reserved for the terminator.
        if self.pos + 1 >= self.out.len() {
            return Err(Error::BufferTooSmall { index: self.pos, capacity: self.out.len() });
        }
        self.out[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }
}

/// Encode `count` code units of `input` into `out`.
///
/// The last byte of `out` is zeroed before anything else, so the buffer is
/// terminated even when encoding fails part way. Returns the number of bytes
/// written, not counting the terminator.
///
/// # Errors
///
/// * [`Error::BufferTooSmall`] if the encoded form does not fit in `out`
///   with one byte left for the terminator.
/// * [`Error::BadBufferSize`] if `count` exceeds `input.len()`.
pub fn encode_into(input: &[u16], count: usize, out: &mut [u8]) -> Result<usize> {
    let capacity = out.len();
    let Some(last) = out.last_mut() else {
        return Err(Error::BufferTooSmall { index: 0, capacity: 0 });
    };
    *last = 0;

    let mut writer = BoundedWriter::new(out);
    for index in 0..count {
        let unit = *input.get(index).ok_or(Error::BadBufferSize { index, count: input.len() })?;

        match unit {
            0x0000..=0x007F => {
                writer.push(unit as u8)?;
            },
            0x0080..=0x07FF => {
                // Four-bit lead mask: bit 10 of U+0400..U+07FF is not carried.
                writer.push(0xC0 | ((unit >> 6) & 0x0F) as u8)?;
                writer.push(0x80 | (unit & 0x3F) as u8)?;
            },
            _ => {
                writer.push(0xE0 | ((unit >> 12) & 0x0F) as u8)?;
                writer.push(0x80 | ((unit >> 6) & 0x3F) as u8)?;
                writer.push(0x80 | (unit & 0x3F) as u8)?;
            },
        }
    }

    let written = writer.pos;
    if written + 1 < capacity {
        writer.out[written] = 0;
    }

    trace!(units = count, bytes = written, capacity, "encoded UTF-16 input");
    Ok(written)
}

/// Encode all of `input` into a freshly allocated buffer of exactly
/// `3 * input.len() + 1` bytes.
pub fn encode(input: &[u16]) -> Result<EncodedBuffer> {
    let mut buf = vec![0u8; required_capacity(input.len())];
    let len = encode_into(input, input.len(), &mut buf)?;
    Ok(EncodedBuffer { buf, len })
}

/// Encode the first `count` units of `input`, or when `count` is `None`
/// every unit up to the first NUL (or the end of the slice).
pub fn utf8_from_unicode(input: &[u16], count: Option<usize>) -> Result<EncodedBuffer> {
    let count = count.unwrap_or_else(|| input.iter().position(|&u| u == 0).unwrap_or(input.len()));
    if count > input.len() {
        return Err(Error::BadBufferSize { index: input.len(), count: input.len() });
    }
    let mut buf = vec![0u8; required_capacity(count)];
    let len = encode_into(input, count, &mut buf)?;
    Ok(EncodedBuffer { buf, len })
}

/// Encode a Rust string after splitting it into UTF-16 code units
pub fn encode_str(text: &str) -> Result<EncodedBuffer> {
    let units: Vec<u16> = text.encode_utf16().collect();
    encode(&units)
}
