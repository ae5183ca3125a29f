//! Text normalization shared by the loaders and classifiers

use encoding_rs::{UTF_8, WINDOWS_1252};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Parenthesised annotation anywhere in a stat-table name, e.g. `"Bobby Orr (D)"`
static POSITION_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.+\)\s*").unwrap());

/// Trailing parenthesised league in an amateur team, e.g. `"London Knights (OHL)"`
static TRAILING_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)\s*$").unwrap());

/// Decode raw file bytes. The scraped sources mix encodings within one file,
/// so valid UTF-8 runs are kept and only the invalid bytes are read as
/// Windows-1252.
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    let text = match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => Cow::Owned(decode_mixed(bytes)),
    };

    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_prefix('\u{feff}').unwrap_or(s)),
        Cow::Owned(s) => match s.strip_prefix('\u{feff}') {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(s),
        },
    }
}

fn decode_mixed(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        out.push_str(&WINDOWS_1252.decode_without_bom_handling(chunk.invalid()).0);
    }
    out
}

/// Remove a `(POS)` style annotation from a player name
pub fn strip_position_suffix(name: &str) -> String {
    collapse_whitespace(&POSITION_SUFFIX.replace_all(name, " "))
}

/// Trim and collapse internal runs of whitespace to a single space
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key used to match player names across sources
pub fn name_key(name: &str) -> String {
    collapse_whitespace(name).to_lowercase()
}

/// First value of a slash-separated multi-value field (`"C/LW"` -> `"C"`)
pub fn primary_value(s: &str) -> &str {
    s.split('/').next().unwrap_or(s).trim()
}

/// Contents of the trailing parentheses, if any
pub fn trailing_parenthesised(s: &str) -> Option<&str> {
    TRAILING_PARENS
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|m| !m.is_empty())
}

/// Empty or whitespace-only text is treated as absent
pub fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| collapse_whitespace(&v)).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_position_suffix() {
        assert_eq!(strip_position_suffix("Bobby Orr (D)"), "Bobby Orr");
        assert_eq!(strip_position_suffix("Sebastian Aho  (C/LW) "), "Sebastian Aho");
        assert_eq!(strip_position_suffix("Wayne Gretzky"), "Wayne Gretzky");
    }

    #[test]
    fn test_decode_source_falls_back_to_windows_1252() {
        // "Jönsson" with a Latin-1 ö
        let bytes = b"J\xf6nsson";
        assert_eq!(decode_source(bytes), "Jönsson");
    }

    #[test]
    fn test_decode_source_keeps_utf8_next_to_windows_1252() {
        let bytes = b"Teemu Sel\xc3\xa4nne\nJ\xf6nsson\n";
        assert_eq!(decode_source(bytes), "Teemu Selänne\nJönsson\n");

        let bytes = b"\xef\xbb\xbfPLAYER_NAME\nJ\xf6nsson";
        assert_eq!(decode_source(bytes), "PLAYER_NAME\nJönsson");
    }

    #[test]
    fn test_decode_source_strips_bom() {
        let bytes = "\u{feff}PLAYER_ID".as_bytes();
        assert_eq!(decode_source(bytes), "PLAYER_ID");
    }

    #[test]
    fn test_trailing_parenthesised() {
        assert_eq!(trailing_parenthesised("London Knights (OHL)"), Some("OHL"));
        assert_eq!(
            trailing_parenthesised("Team USA (U18) (USDP/USHL)"),
            Some("USDP/USHL")
        );
        assert_eq!(trailing_parenthesised("Frolunda HC"), None);
        assert_eq!(trailing_parenthesised("Nowhere ()"), None);
    }

    #[test]
    fn test_primary_value() {
        assert_eq!(primary_value("Canada/USA"), "Canada");
        assert_eq!(primary_value(" C / LW"), "C");
        assert_eq!(primary_value("D"), "D");
    }

    #[test]
    fn test_name_key() {
        assert_eq!(name_key("  Connor   McDavid "), "connor mcdavid");
    }
}
