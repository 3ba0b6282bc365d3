//! Recursive-descent decoder for the bracketed run-length notation.

use crate::error::DecodeError;
use crate::grammar::{is_all_digits, split_count_and_content};

/// Maximum group nesting the decoder follows before giving up.
///
/// Deeper input fails with [`DecodeError::NestingTooDeep`] instead of
/// exhausting the call stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Expands bracketed run-length notation back into plain text.
///
/// Each `[count content]` group appends the decoded content `count` times;
/// every other character is copied through unchanged. Groups nest up to
/// [`MAX_NESTING_DEPTH`] levels, and a count of zero makes a group vanish.
///
/// # Errors
///
/// * [`DecodeError::UnbalancedBrackets`] when a `[` is never closed
/// * [`DecodeError::MalformedGroup`] when a body has no space separator or
///   empty content
/// * [`DecodeError::InvalidCount`] when the count token is empty, non-digit,
///   or too large for `usize`
/// * [`DecodeError::NestingTooDeep`] past the nesting cap
pub fn decode(notation: &str) -> Result<String, DecodeError> {
    decode_span(notation, 0)
}

/// Decodes one balanced span of notation at the given nesting depth.
///
/// Each recursive call parses a strictly smaller span, so decoding always
/// terminates on finite input.
fn decode_span(notation: &str, depth: usize) -> Result<String, DecodeError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(DecodeError::NestingTooDeep);
    }

    let mut output = String::with_capacity(notation.len());
    let mut rest = notation;

    while let Some(open) = rest.find('[') {
        // Everything before the bracket is literal, stray `]` included.
        output.push_str(&rest[..open]);

        let after_open = &rest[open + 1..];
        let close = matching_close(after_open)?;
        let body = &after_open[..close];

        let (count_token, content) =
            split_count_and_content(body).ok_or(DecodeError::MalformedGroup)?;
        if content.is_empty() {
            return Err(DecodeError::MalformedGroup);
        }
        if !is_all_digits(count_token) {
            return Err(DecodeError::InvalidCount(count_token.to_string()));
        }
        let count: usize = count_token
            .parse()
            .map_err(|_| DecodeError::InvalidCount(count_token.to_string()))?;

        let decoded = decode_span(content, depth + 1)?;
        for _ in 0..count {
            output.push_str(&decoded);
        }

        rest = &after_open[close + 1..];
    }
    output.push_str(rest);

    Ok(output)
}

/// Byte offset of the `]` matching an already-consumed `[`.
///
/// Scans forward counting nesting depth. Brackets are ASCII, so a byte scan
/// never lands inside a multi-byte character.
fn matching_close(span: &str) -> Result<usize, DecodeError> {
    let mut depth = 1usize;
    for (at, byte) in span.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(at);
                }
            }
            _ => {}
        }
    }
    Err(DecodeError::UnbalancedBrackets)
}
