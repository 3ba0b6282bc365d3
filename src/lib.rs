//! # Bracket-RLE - Reversible Run-Length Text Notation
//!
//! A codec for a bracketed run-length text notation. The encoder collapses
//! maximal runs of a repeated character into `[count char]` groups; the
//! decoder is a recursive-descent parser that expands groups back, including
//! the nested `[count group]` forms the encoder itself never emits.
//!
//! A group is `'[' count ' ' content ']'`:
//! 1. **count**: a non-negative decimal integer; zero makes the group vanish
//! 2. **content**: any notation, re-parsed recursively; everything after
//!    the *first* space up to the matching bracket, further spaces included
//!
//! ## Example
//!
//! ```
//! use bracket_rle::{decode, encode};
//!
//! let encoded = encode("aaabbbbc");
//! assert_eq!(encoded, "[3 a][4 b]c");
//! assert_eq!(decode(&encoded).unwrap(), "aaabbbbc");
//!
//! // The decoder also accepts nesting the encoder never produces.
//! assert_eq!(decode("[2 [3 a]]").unwrap(), "aaaaaa");
//! ```
//!
//! ## Errors
//!
//! Decoding malformed notation yields a typed [`DecodeError`]; the line-wise
//! drivers attribute a failure to its 1-based line via [`LineError`]. No
//! call ever returns partial output alongside an error.

mod decode;
mod encode;
mod error;
mod grammar;
mod multiline;

#[cfg(test)]
mod tests;

pub use decode::{decode, MAX_NESTING_DEPTH};
pub use encode::encode;
pub use error::{DecodeError, LineError};
pub use multiline::{decode_multiline, encode_multiline};
