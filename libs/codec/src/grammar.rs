//! # Message Grammar - Literal Pattern Layer
//!
//! ## Purpose
//!
//! Recognises the text shapes of the message format without interpreting them:
//!
//! ```text
//! Message   := [Header] Field Field
//! Header    := "|" digits FieldText* "|"
//! FieldText := "{" digits "}" "[" B64* "]"
//! ```
//!
//! `digits` are ASCII `0`-`9` only. `Header` admits zero fields so that `|0|`
//! is a valid empty header; a non-zero count still needs that many fields.
//!
//! Bracket content never contains `]` and header content never contains `|`,
//! so every pattern here is a linear scan with a single possible match at each
//! position. Decoding and validation live in [`crate::field`] and
//! [`crate::parser`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of fields following the header: key, then content
pub const BODY_FIELD_COUNT: usize = 2;

/// Field-shaped substring anywhere in a text
static FIELD_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[0-9]+\}\[[^\]]*\]").expect("field pattern is valid"));

/// A whole text that is exactly one field, capturing length digits and payload
static FIELD_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([0-9]+)\}\[([^\]]*)\]$").expect("exact field pattern is valid"));

/// Leading header block, capturing count digits and inner content
static HEADER_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|([0-9]+)([^|]*)\|").expect("header pattern is valid"));

/// Header block split off the front of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock<'a> {
    /// Declared field count, as written
    pub count_digits: &'a str,
    /// Text between the count and the closing delimiter
    pub inner: &'a str,
    /// Everything after the closing delimiter
    pub remainder: &'a str,
}

/// Split a leading `|N...|` header block off the input, if one is present
pub fn split_header(input: &str) -> Option<HeaderBlock<'_>> {
    let caps = HEADER_BLOCK.captures(input)?;
    let whole = caps.get(0)?;
    Some(HeaderBlock {
        count_digits: caps.get(1)?.as_str(),
        inner: caps.get(2)?.as_str(),
        remainder: &input[whole.end()..],
    })
}

/// All field-shaped substrings of `text`, in textual order
///
/// Characters between fields are skipped, so only the count of the result is
/// meaningful to callers checking structure.
pub fn find_fields(text: &str) -> Vec<&str> {
    FIELD_TEXT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Match `text` as exactly one field, returning `(length_digits, payload)`
pub fn match_field(text: &str) -> Option<(&str, &str)> {
    let caps = FIELD_EXACT.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        let block = split_header("|2{1}[YQ==]{1}[Yg==]|{1}[Yw==]{0}[]").unwrap();
        assert_eq!(block.count_digits, "2");
        assert_eq!(block.inner, "{1}[YQ==]{1}[Yg==]");
        assert_eq!(block.remainder, "{1}[Yw==]{0}[]");
    }

    #[test]
    fn test_split_empty_header() {
        let block = split_header("|0|{3}[YWJj]{0}[]").unwrap();
        assert_eq!(block.count_digits, "0");
        assert_eq!(block.inner, "");
        assert_eq!(block.remainder, "{3}[YWJj]{0}[]");
    }

    #[test]
    fn test_no_header() {
        assert!(split_header("{3}[YWJj]{0}[]").is_none());
        // Opening delimiter without a count
        assert!(split_header("|{3}[YWJj]|{0}[]").is_none());
        // Never closed
        assert!(split_header("|1{3}[YWJj]{0}[]").is_none());
    }

    #[test]
    fn test_find_fields_skips_noise() {
        let fields = find_fields("xx{1}[YQ==] {2}[] {x}[YQ==]{0}[]");
        assert_eq!(fields, vec!["{1}[YQ==]", "{2}[]", "{0}[]"]);
        assert!(find_fields("invalid message format").is_empty());
    }

    #[test]
    fn test_payload_stops_at_first_close() {
        // A closing bracket always ends the payload
        let fields = find_fields("{1}[YQ==]]{1}[Yg==]");
        assert_eq!(fields, vec!["{1}[YQ==]", "{1}[Yg==]"]);
    }

    #[test]
    fn test_match_field() {
        assert_eq!(match_field("{12}[aGVsbG8=]"), Some(("12", "aGVsbG8=")));
        assert_eq!(match_field("{0}[]"), Some(("0", "")));
        assert_eq!(match_field("{abc}[dGVzdA==]"), None);
        assert_eq!(match_field("{4}[dGVzdA=="), None);
        assert_eq!(match_field("{4}[dGVzdA==]tail"), None);
        assert_eq!(match_field("4[dGVzdA==]"), None);
    }

    #[test]
    fn test_digits_are_ascii_only() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        assert_eq!(match_field("{\u{663}}[YWJj]"), None);
        assert_eq!(find_fields("{3}[YWJj]{\u{663}}[]{5}[aGVsbG8=]").len(), 2);
        assert!(split_header("|\u{663}{3}[YWJj]|{0}[]").is_none());
    }
}
