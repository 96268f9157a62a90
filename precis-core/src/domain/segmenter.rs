//! Sentence segmentation
//!
//! Splits normalized text after each `.`, `!` or `?` that is followed by
//! whitespace and keeps only candidates whose word count is within bounds.
//! The resulting order is the index space every later stage refers to.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default minimum words for a sentence to be kept
pub const DEFAULT_MIN_WORDS: usize = 8;

/// Default maximum words for a sentence to be kept
pub const DEFAULT_MAX_WORDS: usize = 50;

fn boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"))
}

/// Whether `c` ends a sentence
pub fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Count whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A sentence kept by the segmenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    text: String,
    word_count: usize,
}

impl Sentence {
    /// Create a sentence, appending a period if it lacks a terminator
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into().trim().to_string();
        if !text.ends_with(is_terminator) {
            text.push('.');
        }
        let word_count = word_count(&text);
        Self { text, word_count }
    }

    /// The sentence text, always ending with `.`, `!` or `?`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of whitespace-delimited words
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Word-count bounded sentence splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    min_words: usize,
    max_words: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS)
    }
}

impl Segmenter {
    /// Create a segmenter keeping sentences of `min_words..=max_words` words
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    /// Split normalized text into sentences
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        split_candidates(text)
            .into_iter()
            .map(str::trim)
            .filter(|candidate| {
                let words = word_count(candidate);
                words >= self.min_words && words <= self.max_words
            })
            .map(Sentence::new)
            .collect()
    }
}

/// Raw split points: after a terminator, before the whitespace following it.
fn split_candidates(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for m in boundary().find_iter(text) {
        // Terminators are single-byte ASCII, so +1 stays on a char boundary.
        let end = m.start() + 1;
        pieces.push(&text[start..end]);
        start = m.end();
    }
    pieces.push(&text[start..]);

    pieces
}
