//! Text normalization
//!
//! Cleans raw article text before segmentation: whitespace runs collapse to a
//! single space, run-on sentences get their missing space back, and symbols
//! outside the allowed punctuation set are dropped.

use regex::Regex;
use std::sync::OnceLock;

/// Punctuation kept by [`normalize`] in addition to alphanumerics and whitespace
pub const ALLOWED_PUNCTUATION: &[char] = &['.', '!', '?', ',', ':', ';', '(', ')', '-'];

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn missing_space() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?])([A-Z])").expect("run-on pattern is valid"))
}

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Normalize raw text for segmentation.
///
/// Never fails; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let collapsed = whitespace_run().replace_all(text, " ");
    let spaced = missing_space().replace_all(&collapsed, "$1 $2");
    let filtered: String = spaced.chars().filter(|&c| is_allowed(c)).collect();

    // Dropping a symbol between two spaces leaves a double space behind.
    whitespace_run()
        .replace_all(&filtered, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_inserts_space_after_terminator() {
        assert_eq!(normalize("First one.Second one!Third?Yes"), "First one. Second one! Third? Yes");
    }

    #[test]
    fn test_lowercase_after_period_untouched() {
        assert_eq!(normalize("version 1.5 and e.g.this"), "version 1.5 and e.g.this");
    }

    #[test]
    fn test_strips_disallowed_symbols() {
        assert_eq!(
            normalize("Price: $40 (approx.) - \"great\" & #1; done!"),
            "Price: 40 (approx.) - great 1; done!"
        );
    }

    #[test]
    fn test_no_double_space_after_removal() {
        assert_eq!(normalize("cats & dogs"), "cats dogs");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("   padded text.   "), "padded text.");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(normalize("Café naïve résumé."), "Café naïve résumé.");
    }
}
