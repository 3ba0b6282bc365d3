//! Token-level helpers for the `[count content]` group grammar.

/// Splits a group body at its first space into `(count, content)`.
///
/// Returns `None` when the body contains no space, which the decoder reports
/// as a malformed group. Only the first space separates: the content half may
/// itself contain further spaces or nested brackets.
pub(crate) fn split_count_and_content(body: &str) -> Option<(&str, &str)> {
    let at = body.find(' ')?;
    Some((&body[..at], &body[at + 1..]))
}

/// True iff `token` is non-empty and made of ASCII decimal digits only.
///
/// Signs, decimal points, letters, and non-ASCII digits all fail.
pub(crate) fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
