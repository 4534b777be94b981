//! Lazy field splitting over one line of input.
//!
//! A [`Tokenizer`] walks a [`LineBuffer`] left to right and hands out one
//! token at a time: each token is a maximal run of bytes containing no
//! byte from the [`SeparatorSet`]. Consecutive separators collapse to a
//! single boundary, so zero-length tokens are never produced.
//!
//! Unlike the classic `strtok` family, nothing is overwritten in place:
//! tokens are `&str` slices delimited by index pairs into the immutable
//! buffer, and the scan position lives in a [`Cursor`](ltok_core::Cursor)
//! owned by the tokenizer.
//!
//! ```
//! use ltok::{LineBuffer, SeparatorSet, Tokenizer};
//!
//! let line = LineBuffer::new("ls    -al");
//! let mut tok = Tokenizer::new(&line, SeparatorSet::whitespace())?;
//! assert_eq!(tok.next_token(), Some("ls"));
//! assert_eq!(tok.next_token(), Some("-al"));
//! assert_eq!(tok.next_token(), None);
//! # Ok::<(), ltok::SplitError>(())
//! ```

mod separators;
mod split_error;
mod tokenizer;

pub use ltok_core::LineBuffer;
pub use separators::SeparatorSet;
pub use split_error::SplitError;
pub use tokenizer::Tokenizer;
