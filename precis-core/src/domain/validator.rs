//! Pre-flight input validation
//!
//! A deliberately loose check run by adapters before summarizing. Its sentence
//! count splits on terminator runs without any word bounds, so passing it does
//! not guarantee the segmenter will find enough usable sentences.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default minimum word count
pub const DEFAULT_MIN_WORDS: usize = 30;

/// Default minimum sentence count
pub const DEFAULT_MIN_SENTENCES: usize = 3;

fn terminator_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator pattern is valid"))
}

/// Count non-empty segments between runs of `.`, `!` and `?`
pub fn rough_sentence_count(text: &str) -> usize {
    terminator_run()
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Outcome of [`Validator::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the text may be summarized
    pub is_valid: bool,
    /// Human-readable verdict
    pub message: String,
    /// Whitespace-delimited words in the text
    pub word_count: usize,
    /// Rough sentence count
    pub sentence_count: usize,
}

impl ValidationResult {
    fn reject(message: impl Into<String>, word_count: usize, sentence_count: usize) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            word_count,
            sentence_count,
        }
    }
}

/// Word and sentence threshold gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min_words: usize,
    min_sentences: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS, DEFAULT_MIN_SENTENCES)
    }
}

impl Validator {
    /// Create a validator with explicit thresholds
    pub fn new(min_words: usize, min_sentences: usize) -> Self {
        Self {
            min_words,
            min_sentences,
        }
    }

    /// Check `text` against the word and sentence thresholds
    pub fn validate(&self, text: &str) -> ValidationResult {
        if text.trim().is_empty() {
            return ValidationResult::reject("No text provided", 0, 0);
        }

        let word_count = text.split_whitespace().count();
        let sentence_count = rough_sentence_count(text);

        if word_count < self.min_words {
            return ValidationResult::reject(
                format!(
                    "Text too short: {word_count} words (minimum {} required)",
                    self.min_words
                ),
                word_count,
                sentence_count,
            );
        }

        if sentence_count < self.min_sentences {
            return ValidationResult::reject(
                format!(
                    "Need at least {} sentences for summarization.",
                    self.min_sentences
                ),
                word_count,
                sentence_count,
            );
        }

        ValidationResult {
            is_valid: true,
            message: "Text is valid".to_string(),
            word_count,
            sentence_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    #[test]
    fn test_empty_text() {
        let result = Validator::default().validate("");
        assert!(!result.is_valid);
        assert_eq!(result.message, "No text provided");

        let result = Validator::default().validate("  \n ");
        assert_eq!(result.message, "No text provided");
    }

    #[test]
    fn test_too_few_words() {
        let text = "One. Two. Three. Four. Five.";
        let result = Validator::default().validate(text);
        assert!(!result.is_valid);
        assert!(result.message.contains('5'));
        assert!(result.message.contains("30"));
        assert_eq!(result.word_count, 5);
        assert_eq!(result.sentence_count, 5);
    }

    #[test]
    fn test_too_few_sentences() {
        let text = format!("{}. {}!", filler(20), filler(20));
        let result = Validator::default().validate(&text);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Need at least 3 sentences for summarization.");
        assert_eq!(result.sentence_count, 2);
    }

    #[test]
    fn test_valid_text() {
        let text = format!("{}. {}? {}!", filler(10), filler(10), filler(10));
        let result = Validator::default().validate(&text);
        assert!(result.is_valid);
        assert_eq!(result.message, "Text is valid");
        assert_eq!(result.word_count, 30);
        assert_eq!(result.sentence_count, 3);
    }

    #[test]
    fn test_rough_count_collapses_terminator_runs() {
        assert_eq!(rough_sentence_count("Wait... what?! Really."), 3);
        assert_eq!(rough_sentence_count("no terminator at all"), 1);
        assert_eq!(rough_sentence_count("..."), 0);
    }

    #[test]
    fn test_counts_sentences_regardless_of_length() {
        // Two-word sentences count here though the segmenter would drop them
        assert_eq!(rough_sentence_count("Hi there. Bye now. See you."), 3);
    }
}
