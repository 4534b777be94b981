//! On-demand tokenizer over a sentinel-terminated line buffer.
//!
//! [`Tokenizer::next_token`] advances past any leading separators, then
//! scans to the next separator (or end of line) and returns the slice in
//! between. The scan position is a [`Cursor`] owned by the tokenizer, so
//! the borrow checker enforces the classic `strtok` rule for free:
//! introducing a new buffer means building a new tokenizer, and the old
//! cursor cannot outlive its buffer.
//!
//! # Invariant
//!
//! Joining the produced tokens with exactly one separator reconstructs
//! the separator-normalized input: runs of separators collapse, and
//! zero-length tokens are never produced.

use ltok_core::{Cursor, LineBuffer};

use crate::separators::SeparatorSet;
use crate::split_error::SplitError;

/// Lazy token producer over one [`LineBuffer`].
///
/// Tokens borrow from the buffer (`&'a str`), so they stay valid after
/// the tokenizer itself is dropped.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    /// Scan position. `Copy`, which makes the non-consuming lookahead in
    /// [`collect_up_to`](Self::collect_up_to) a snapshot-and-restore.
    cursor: Cursor<'a>,
    seps: SeparatorSet,
    /// `memchr3` needles when the separator set has at most three
    /// distinct bytes; `None` selects the table-driven scan.
    fast: Option<(u8, u8, u8)>,
}

impl<'a> Tokenizer<'a> {
    /// Initialize a tokenizer at the start of `line`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidArgument`] when `seps` is empty, or
    /// when it was built from non-ASCII bytes (splitting on those would
    /// cut multibyte UTF-8 sequences mid-character; see the
    /// [`SeparatorSet`] docs). An empty line is valid input and simply
    /// yields no tokens.
    pub fn new(line: &'a LineBuffer, seps: SeparatorSet) -> Result<Self, SplitError> {
        if seps.has_non_ascii() {
            return Err(SplitError::InvalidArgument(
                "separator bytes must be ASCII",
            ));
        }
        if seps.is_empty() {
            return Err(SplitError::InvalidArgument(
                "separator set must not be empty",
            ));
        }
        let fast = seps.memchr_needles();
        Ok(Self {
            cursor: line.cursor(),
            seps,
            fast,
        })
    }

    /// Produce the next token, or `None` at end of input.
    ///
    /// Skips leading separators, then returns the maximal run of
    /// non-separator bytes starting at the cursor. `None` means
    /// end-of-sequence, not an error, and the call is idempotent: every
    /// call after exhaustion keeps returning `None`.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.cursor.eat_while(|b| self.seps.contains(b));
        if self.cursor.is_eol() {
            return None;
        }
        let start = self.cursor.pos();
        match self.fast {
            Some((a, b, c)) => {
                self.cursor.skip_to_any3(a, b, c);
            }
            None => self.eat_token_bytes(),
        }
        Some(self.cursor.slice_from(start))
    }

    /// Collect at most `max` tokens; the flag reports whether more input
    /// remains past the cap.
    ///
    /// Mirrors fixed-capacity argument arrays in callers that cannot take
    /// an unbounded number of fields. The lookahead that computes the
    /// flag does not consume: the cursor is snapshotted and restored.
    pub fn collect_up_to(&mut self, max: usize) -> (Vec<&'a str>, bool) {
        let mut tokens = Vec::new();
        while tokens.len() < max {
            match self.next_token() {
                Some(tok) => tokens.push(tok),
                None => return (tokens, false),
            }
        }
        let snapshot = self.cursor;
        let more = self.next_token().is_some();
        self.cursor = snapshot;
        (tokens, more)
    }

    /// Table-driven scan to the next separator for sets too large for
    /// `memchr3`.
    ///
    /// `eat_while` must stop on NUL (the sentinel), so an interior NUL
    /// also stops it; since NUL is never a separator, it is consumed
    /// explicitly as ordinary token content and the scan continues.
    fn eat_token_bytes(&mut self) {
        loop {
            self.cursor.eat_while(|b| b != 0 && !self.seps.contains(b));
            if self.cursor.current() == 0 && !self.cursor.is_eol() {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next_token()
    }
}
