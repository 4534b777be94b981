//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of line is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached or exceeded the line length. No explicit bounds
//! checking is performed in the common case -- the sentinel guarantees
//! safe termination.
//!
//! # Interior Null Bytes
//!
//! If the line contains interior null bytes (U+0000), the cursor
//! distinguishes them from end of line by comparing `pos` against
//! `line_len`. A null at `pos < line_len` is interior content; a null at
//! `pos >= line_len` is the sentinel.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`LineBuffer::cursor()`](crate::LineBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[line_len] == 0x00`, and all
/// bytes after `line_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`LineBuffer`](crate::LineBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (line + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual line content (excludes sentinel and padding).
    line_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[line_len]` must be `0x00` (sentinel). All bytes after the
    /// sentinel must also be `0x00` (padding). This is guaranteed by
    /// `LineBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], line_len: u32) -> Self {
        debug_assert!(
            (line_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[line_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            line_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at end of line (the sentinel byte). Interior
    /// null bytes also return `0x00`; use [`is_eol()`](Self::is_eol) to
    /// distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` if the cursor has consumed the whole line.
    ///
    /// End of line is when the current byte is the sentinel (`0x00`) and
    /// the position is at or past the line length. This distinguishes
    /// end of line from interior null bytes.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.current() == 0 && self.pos >= self.line_len
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the line content (excludes sentinel and padding).
    #[inline]
    pub fn line_len(&self) -> u32 {
        self.line_len
    }

    /// Extract a line substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the line content (`end <= line_len`)
    /// and on valid UTF-8 character boundaries. This holds whenever
    /// `start` and `end` come from token boundary tracking, since the
    /// line was originally valid UTF-8 (`&str`) and token boundaries are
    /// ASCII separator positions.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on a line originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.line_len,
            "slice end {end} exceeds line length {}",
            self.line_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer was constructed from `&str` (valid UTF-8).
        // Token boundaries are single-byte (ASCII) separator positions,
        // so start..end falls on character boundaries within the content.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a line substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel terminates the loop.
    /// This holds for every separator-set predicate in `ltok`: NUL is
    /// never a separator and never a token byte under a predicate that
    /// excludes it.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the earliest occurrence of `a`, `b`, or `c` within the
    /// line content, or to end of line if none occurs. Returns the byte
    /// found, or 0 at end of line.
    ///
    /// Uses `memchr3` for SIMD-accelerated search. Needles may repeat
    /// when the caller has fewer than three distinct bytes to find.
    /// Interior null bytes are skipped over like any other non-needle
    /// byte; scanning never enters the sentinel or padding region.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= line_len which fits in u32"
    )]
    pub fn skip_to_any3(&mut self, a: u8, b: u8, c: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.line_len as usize];
        if let Some(offset) = memchr::memchr3(a, b, c, remaining) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.line_len;
            0
        }
    }
}

#[cfg(test)]
mod tests;
