//! Error type for tokenizer initialization.
//!
//! Only one kind is meaningful: `InvalidArgument`, raised when
//! initialization receives an empty separator set. Everything else --
//! empty line, all-separator line -- is valid input that yields an empty
//! token sequence, not an error, and running off the end of the input is
//! end-of-sequence, not an error.

use thiserror::Error;

/// Error raised when a [`Tokenizer`](crate::Tokenizer) is initialized
/// with invalid inputs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SplitError {
    /// An initialization input violated a precondition. The payload names
    /// the violated precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
