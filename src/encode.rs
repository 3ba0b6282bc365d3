//! Greedy run-length encoder producing the bracketed notation.

/// Collapses maximal runs of an identical character into `[len char]`.
///
/// Singletons are emitted as themselves and the empty string encodes to
/// itself, so encoding never fails. Output only ever contains flat
/// single-character groups; the decoder's nested-group grammar is a strict
/// superset of what this function produces. Literal `[` and `]` pass through
/// unescaped, so only bracket-free input is guaranteed to survive an
/// encode/decode round trip.
pub fn encode(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut run: Option<(char, usize)> = None;

    for unit in text.chars() {
        match run {
            Some((current, length)) if current == unit => {
                run = Some((current, length + 1));
            }
            _ => {
                flush_run(&mut output, run);
                run = Some((unit, 1));
            }
        }
    }
    flush_run(&mut output, run);

    output
}

/// Emits a finished run: `[len unit]` for len > 1, the bare unit for 1.
fn flush_run(output: &mut String, run: Option<(char, usize)>) {
    match run {
        Some((unit, length)) if length > 1 => {
            output.push_str(&format!("[{} {}]", length, unit));
        }
        Some((unit, _)) => output.push(unit),
        None => {}
    }
}
