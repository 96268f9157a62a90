//! Stop words and content-token extraction
//!
//! A [`Vocabulary`] decides which words of a text carry topical weight. It is
//! immutable once built and is shared between summarizers through `Arc`.

use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Built-in English stop words: function words plus the fragments left behind
/// when contractions are split on the apostrophe.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
    "this", "that", "these", "those", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "my", "your", "his", "its", "our", "their", "what", "which", "who",
    "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most",
    "other", "some", "such", "not", "only", "own", "same", "than", "too", "very", "just",
    "also", "then", "there", "here", "over", "under", "again", "once", "off", "out", "don",
    "doesn", "didn", "isn", "aren", "wasn", "weren", "won", "wouldn", "couldn", "shouldn",
    "hasn", "haven", "hadn", "ll", "ve", "re",
];

/// Alphabetic runs of at least three ASCII letters.
const TOKEN_PATTERN: &str = r"[a-zA-Z]{3,}";

static ENGLISH: OnceLock<Arc<Vocabulary>> = OnceLock::new();

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Stop-word set applied on top of the `[a-zA-Z]{3,}` tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    stop_words: HashSet<String>,
}

impl Vocabulary {
    /// Build the built-in English vocabulary
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// The process-wide English vocabulary, initialized on first use
    pub fn shared_english() -> Arc<Vocabulary> {
        Arc::clone(ENGLISH.get_or_init(|| Arc::new(Self::english())))
    }

    /// Build a vocabulary from an explicit stop-word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stop_words }
    }

    /// Return a copy of this vocabulary with extra stop words added
    pub fn with_additional<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = self.stop_words.clone();
        stop_words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { stop_words }
    }

    /// Check whether a lowercase token is a stop word
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the stop-word set is empty
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Lowercase alphabetic tokens of `text`, stop words removed, in order of
    /// appearance.
    pub fn content_tokens(&self, text: &str) -> Vec<String> {
        token_regex()
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}
