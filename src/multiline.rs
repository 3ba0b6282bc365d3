//! Line-wise drivers: each line of a blob goes through the codec on its own.

use tracing::{debug, trace};

use crate::decode::decode;
use crate::encode::encode;
use crate::error::LineError;

/// Decodes every line of `text` independently, appending a newline after
/// each decoded line.
///
/// Lines share no decoder state; a count in one line never affects another.
/// The first line that fails aborts the whole call and no partial output
/// survives.
///
/// # Errors
///
/// Returns the first failing line's [`DecodeError`](crate::DecodeError)
/// wrapped in a [`LineError`] carrying its 1-based line number.
pub fn decode_multiline(text: &str) -> Result<String, LineError> {
    trace!(bytes = text.len(), "decoding multiline input");

    let mut output = String::with_capacity(text.len());
    for (index, line) in text.split('\n').enumerate() {
        match decode(line) {
            Ok(decoded) => {
                output.push_str(&decoded);
                output.push('\n');
            }
            Err(source) => {
                let line = index + 1;
                debug!(line, error = %source, "line failed to decode");
                return Err(LineError { line, source });
            }
        }
    }
    Ok(output)
}

/// Encodes every line of `text` independently, appending a newline after
/// each encoded line. Never fails.
pub fn encode_multiline(text: &str) -> String {
    trace!(bytes = text.len(), "encoding multiline input");

    let mut output = String::with_capacity(text.len());
    for line in text.split('\n') {
        output.push_str(&encode(line));
        output.push('\n');
    }
    output
}
