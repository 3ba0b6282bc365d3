use thiserror::Error;

use crate::decode::MAX_NESTING_DEPTH;

/// Failure modes of [`decode`](crate::decode).
///
/// Decoding never produces partial output: a call yields either the complete
/// decoded string or exactly one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An opening `[` has no matching `]` before the input ends.
    #[error("unbalanced brackets: a group is opened but never closed")]
    UnbalancedBrackets,

    /// A group body has no count/content separator, or nothing after it.
    #[error("malformed group: missing count/content separator or empty content")]
    MalformedGroup,

    /// The count token is empty, contains a non-digit, or is too large to
    /// represent. Carries the offending token.
    #[error("invalid count {0:?}: expected a representable non-negative decimal integer")]
    InvalidCount(String),

    /// Group nesting exceeded [`MAX_NESTING_DEPTH`].
    #[error("groups nested deeper than {} levels", MAX_NESTING_DEPTH)]
    NestingTooDeep,
}

/// A [`DecodeError`] attributed to one line of multiline input.
///
/// Lines are numbered from 1 in input order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based number of the line that failed.
    pub line: usize,

    /// The failure that line raised.
    #[source]
    pub source: DecodeError,
}
