//! Payload extraction from the evaluator's textual output.

use once_cell::sync::Lazy;
use regex::Regex;

// An outer quote pair, optionally wrapping one inner quoted value.
static QUOTED_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""("?[^"]*"?)""#).expect("valid payload pattern"));

/// Payload used when a quoted envelope cannot be found.
///
/// This masks malformed output as a zero reading.
pub const FALLBACK_PAYLOAD: &str = "0";

/// Extract the payload from raw evaluator output.
///
/// Text without any double quote is returned verbatim. Otherwise the
/// content of the first quoted envelope is returned with its outer
/// quotes stripped, falling back to [`FALLBACK_PAYLOAD`].
pub fn extract_payload(raw: &str) -> &str {
    if !raw.contains('"') {
        return raw;
    }

    QUOTED_PAYLOAD
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(FALLBACK_PAYLOAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_outer_quotes() {
        assert_eq!(extract_payload(r#"ValidOutput "42""#), "42");
        assert_eq!(extract_payload(r#"ValidOutput "-0.5""#), "-0.5");
    }

    #[test]
    fn keeps_inner_quoted_value() {
        assert_eq!(extract_payload(r#"ValidOutput ""hello"""#), r#""hello""#);
    }

    #[test]
    fn unquoted_text_is_returned_verbatim() {
        assert_eq!(
            extract_payload("Error: unknown symbol"),
            "Error: unknown symbol"
        );
    }

    #[test]
    fn lone_quote_falls_back_to_zero() {
        assert_eq!(extract_payload(r#"ValidOutput "42"#), FALLBACK_PAYLOAD);
    }
}
