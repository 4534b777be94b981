//! Fixed set of separator bytes.
//!
//! Membership is answered from a 256-entry table so the general scan path
//! is a single indexed load per byte. Sets with at most three distinct
//! bytes additionally expose their raw bytes so the tokenizer can hand
//! them to `memchr3` for SIMD-accelerated search; the default whitespace
//! set (space, tab, newline) hits that fast path.
//!
//! Separators must be ASCII. Token slices are carved out of a buffer that
//! was validated as UTF-8 once, at construction; an ASCII separator byte
//! never occurs inside a multibyte UTF-8 sequence (continuation bytes are
//! `0x80..=0xBF`, lead bytes higher), so every token boundary is a
//! character boundary. A non-ASCII separator would cut sequences mid-
//! character and break that contract, so such sets are rejected at
//! tokenizer initialization.

/// Largest number of distinct bytes the `memchr3` fast path can search for.
const MAX_NEEDLES: usize = 3;

/// A fixed, small set of separator bytes.
///
/// Two byte classes can never be separators:
///
/// - NUL (`0x00`): it is the scan sentinel of the underlying
///   [`LineBuffer`](crate::LineBuffer). NUL bytes passed to
///   [`from_bytes`](Self::from_bytes) are ignored, so a set built only
///   from NULs comes out empty and is rejected at tokenizer
///   initialization.
/// - Non-ASCII bytes (`0x80..`): token boundaries must be UTF-8 character
///   boundaries (see module docs). Sets containing them are remembered as
///   tainted and rejected at tokenizer initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatorSet {
    /// Byte membership table: `table[b]` is `true` iff `b` is a separator.
    table: [bool; 256],
    /// The first `min(count, 3)` distinct separator bytes, in insertion
    /// order. Only meaningful while the whole set fits the `memchr3` fast
    /// path; larger sets ignore them and take the table-driven scan.
    needles: [u8; MAX_NEEDLES],
    /// Number of distinct separator bytes in the set (not just in `needles`).
    count: u16,
    /// `true` when construction saw a non-ASCII byte. Such sets fail
    /// tokenizer initialization with an `InvalidArgument`.
    non_ascii: bool,
}

impl SeparatorSet {
    /// The classic token separators: space, tab, newline.
    pub fn whitespace() -> Self {
        Self::from_bytes(b" \t\n")
    }

    /// Build a set from the given bytes.
    ///
    /// Duplicates are collapsed and NUL bytes are ignored (see type docs).
    /// Non-ASCII bytes are not added to the set, but their presence is
    /// remembered: [`Tokenizer::new`](crate::Tokenizer::new) rejects the
    /// set instead of silently splitting on part of the input's bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut needles = [0u8; MAX_NEEDLES];
        let mut count: u16 = 0;
        let mut non_ascii = false;
        for &b in bytes {
            if !b.is_ascii() {
                non_ascii = true;
                continue;
            }
            if b == 0 || table[b as usize] {
                continue;
            }
            table[b as usize] = true;
            if (count as usize) < MAX_NEEDLES {
                needles[count as usize] = b;
            }
            count += 1;
        }
        Self {
            table,
            needles,
            count,
            non_ascii,
        }
    }

    /// Returns `true` iff `byte` is a separator.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    /// Number of distinct separator bytes in the set.
    pub fn len(&self) -> usize {
        usize::from(self.count)
    }

    /// Returns `true` if the set has no separators.
    ///
    /// An empty set is constructible but rejected by
    /// [`Tokenizer::new`](crate::Tokenizer::new).
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` when construction saw a non-ASCII byte.
    ///
    /// Checked by [`Tokenizer::new`](crate::Tokenizer::new); see the
    /// module docs for why non-ASCII separators are unsupported.
    pub(crate) fn has_non_ascii(&self) -> bool {
        self.non_ascii
    }

    /// The separator bytes as `memchr3` needles, when the set is small
    /// enough for the fast path (1 to 3 distinct bytes). Needles repeat
    /// when the set has fewer than three.
    ///
    /// Returns `None` for larger sets; the tokenizer falls back to the
    /// table-driven scan.
    pub(crate) fn memchr_needles(&self) -> Option<(u8, u8, u8)> {
        match self.count {
            1 => Some((self.needles[0], self.needles[0], self.needles[0])),
            2 => Some((self.needles[0], self.needles[1], self.needles[1])),
            3 => Some((self.needles[0], self.needles[1], self.needles[2])),
            _ => None,
        }
    }
}

impl Default for SeparatorSet {
    /// The whitespace set, matching the classic `" \t\n"` separators.
    fn default() -> Self {
        Self::whitespace()
    }
}
