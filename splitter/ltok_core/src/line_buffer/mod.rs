//! Sentinel-terminated line buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the line content,
//! allowing the cursor to detect end-of-line without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment, which also provides safe zero
//! padding for reads near the end of the buffer.
//!
//! The buffer is immutable after construction. Token boundaries are
//! tracked as index pairs by the caller; nothing is ever overwritten
//! in place.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Largest supported line length in bytes.
///
/// Keeps `line_len` (and the padded buffer size after rounding up to the
/// next cache line) within `u32`, the cursor's position type.
const MAX_LINE_LEN: usize = u32::MAX as usize - CACHE_LINE;

/// Sentinel-terminated line buffer.
///
/// # Layout
///
/// ```text
/// [line_bytes..., 0x00, padding_zeros...]
///  ^              ^     ^
///  0              |     rounded up to 64-byte boundary
///            line_len (sentinel)
/// ```
///
/// The sentinel byte at `line_len` is always `0x00`. All subsequent bytes
/// (cache-line padding) are also `0x00`, so the cursor may read one byte
/// past the content without a bounds check.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    /// Owned buffer: `[line_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual line content (excludes sentinel and padding).
    line_len: u32,
}

impl LineBuffer {
    /// Create a new sentinel-terminated buffer from one line of input.
    ///
    /// Copies the line bytes into a cache-line-aligned buffer with a
    /// `0x00` sentinel byte appended. Interior NUL bytes in `line` are
    /// permitted content; the cursor distinguishes them from the sentinel
    /// by position.
    ///
    /// # Panics
    ///
    /// Panics if `line` is longer than `u32::MAX - 64` bytes. Positions
    /// are tracked as `u32`, and a longer line could not keep the
    /// sentinel at `buf[line_len]`. Callers splitting single lines of
    /// input never get near that bound.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line_len <= MAX_LINE_LEN < u32::MAX, asserted above the cast"
    )]
    pub fn new(line: &str) -> Self {
        let line_bytes = line.as_bytes();
        let line_len = line_bytes.len();
        assert!(
            line_len <= MAX_LINE_LEN,
            "line length {line_len} exceeds the u32 scan range"
        );

        // Round up to the next 64-byte boundary (minimum: line + 1 sentinel byte).
        let padded_len = (line_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled, then copy the line in. The sentinel
        // (buf[line_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..line_len].copy_from_slice(line_bytes);

        Self {
            buf,
            line_len: line_len as u32,
        }
    }

    /// Returns the line bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.line_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.line_len)
    }

    /// Length of the line content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.line_len
    }

    /// Returns `true` if the line content is empty.
    pub fn is_empty(&self) -> bool {
        self.line_len == 0
    }
}

/// Size assertion: `LineBuffer` should stay at Vec + u32 (+ padding).
const _: () = assert!(std::mem::size_of::<LineBuffer>() <= 32);
