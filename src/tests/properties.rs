use crate::decode::decode;
use crate::encode::encode;
use crate::multiline::{decode_multiline, encode_multiline};
use proptest::prelude::*;

/// Collapses adjacent duplicate chars so no run of length >= 2 remains.
fn squash_runs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = None;
    for unit in input.chars() {
        if last != Some(unit) {
            out.push(unit);
            last = Some(unit);
        }
    }
    out
}

proptest! {
    /// Property 1: Roundtrip fidelity.
    /// Any bracket-free text survives encode -> decode unchanged. Literal
    /// brackets pass through the encoder unescaped and are re-read as
    /// grammar by the decoder, so they are excluded by construction.
    #[test]
    fn prop_roundtrip(input in "[^\\[\\]]*") {
        let encoded = encode(&input);
        prop_assert_eq!(decode(&encoded).unwrap(), input);
    }

    /// Property 2: Singleton idempotence.
    /// Text with no run of length >= 2 encodes to itself.
    #[test]
    fn prop_singleton_runs_unchanged(input in "[^\\[\\]]*") {
        let squashed = squash_runs(&input);
        let encoded = encode(&squashed);
        prop_assert_eq!(encoded, squashed);
    }

    /// Property 3: Output growth is bounded.
    /// The worst case is a run of two, which becomes five characters.
    #[test]
    fn prop_encode_growth_bounded(input in "[^\\[\\]]*") {
        let encoded_len = encode(&input).chars().count();
        prop_assert!(2 * encoded_len <= 5 * input.chars().count().max(1));
    }

    /// Property 4: Multiline roundtrip.
    /// Each driver pass appends one newline per processed line, so a full
    /// encode/decode cycle yields the input plus exactly two newlines.
    #[test]
    fn prop_multiline_roundtrip(input in "[^\\[\\]]*") {
        let decoded = decode_multiline(&encode_multiline(&input)).unwrap();
        prop_assert_eq!(decoded, format!("{input}\n\n"));
    }

    /// Property 5: Failures are attributed to the failing line.
    /// Whatever valid lines precede it, a malformed line is reported under
    /// its own 1-based number and nothing is returned for the others.
    #[test]
    fn prop_failure_attributed_to_failing_line(
        prefix_lines in prop::collection::vec("[^\\[\\]\\n]*", 0..5)
    ) {
        let mut blob = prefix_lines.join("\n");
        if !prefix_lines.is_empty() {
            blob.push('\n');
        }
        blob.push_str("[2a b]");

        let err = decode_multiline(&blob).unwrap_err();
        prop_assert_eq!(err.line, prefix_lines.len() + 1);
    }
}

/// Bolero fuzz test: decode never panics on arbitrary input
#[cfg(test)]
#[test]
fn fuzz_decode_no_panic() {
    bolero::check!().with_type::<String>().for_each(|input| {
        let _ = decode(input);
        let _ = decode_multiline(input);
    });
}

/// Bolero fuzz test: bracket-free text always roundtrips
#[cfg(test)]
#[test]
fn fuzz_roundtrip_bracket_free() {
    bolero::check!().with_type::<String>().for_each(|input| {
        let cleaned: String = input
            .chars()
            .filter(|unit| *unit != '[' && *unit != ']')
            .collect();

        let decoded = decode(&encode(&cleaned)).expect("bracket-free text must roundtrip");
        assert_eq!(decoded, cleaned);
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The decoder accepts nested groups but the encoder never emits them:
    /// re-encoding a decoded nested notation yields a flat group.
    #[test]
    fn test_reencoding_flattens_nested_groups() {
        let decoded = decode("[2 [3 a]]").unwrap();
        assert_eq!(decoded, "aaaaaa");
        assert_eq!(encode(&decoded), "[6 a]");
    }

    /// Multi-character groups decode fine, yet encode reproduces the
    /// literal text: the two functions are mutual inverses only over the
    /// encoder's image.
    #[test]
    fn test_encode_is_not_surjective_onto_notation() {
        assert_eq!(decode("[2 ab]").unwrap(), "abab");
        assert_eq!(encode("abab"), "abab");
    }

    #[test]
    fn test_roundtrip_with_newlines_in_core_decode() {
        let text = "aa\nbb";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }
}
