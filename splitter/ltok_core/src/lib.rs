//! Low-level scanning substrate for the `ltok` field splitter.
//!
//! This crate owns the two pieces every higher layer builds on:
//!
//! - [`LineBuffer`]: a sentinel-terminated copy of one line of input, padded
//!   to a cache-line boundary so scanning never bounds-checks in the hot loop.
//! - [`Cursor`]: a [`Copy`] scan position over that buffer with
//!   memchr-accelerated search for separator bytes.
//!
//! The crate is standalone: its only external dependency is `memchr`.
//! Splitting policy (what counts as a separator, what a token is) lives in
//! the `ltok` crate; this layer only knows how to move through bytes.

mod cursor;
mod line_buffer;

pub use cursor::Cursor;
pub use line_buffer::LineBuffer;
