//! Output types for the summarizer

use crate::api::SummarizeError;
use crate::domain::{rough_sentence_count, word_count, Sentence, SummaryStyle};
use serde::{Deserialize, Serialize};

/// Percentage of words removed, rounded to one decimal.
///
/// Zero when the original is empty.
pub fn compression_ratio(summary_words: usize, original_words: usize) -> f64 {
    if original_words == 0 {
        return 0.0;
    }
    let ratio = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
    (ratio * 10.0).round() / 10.0
}

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Position in the segmented sentence list
    pub index: usize,
    /// The sentence
    pub sentence: Sentence,
}

/// A successful summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in source order
    pub sentences: Vec<SummarySentence>,
    /// Rendered summary text
    pub text: String,
    /// Style used for rendering
    pub style: SummaryStyle,
    /// Words in the selected sentences
    pub word_count: usize,
    /// Words in the original text
    pub original_words: usize,
    /// Percentage of words removed
    pub compression_ratio: f64,
}

/// Flat result of a summarize call; never an error value.
///
/// `summary` is non-empty exactly when `success` is true, `error` is set
/// exactly when it is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Whether a summary was produced
    pub success: bool,
    /// Rendered summary, empty on failure
    pub summary: String,
    /// Words in the summary sentences
    pub word_count: usize,
    /// Sentences selected for the summary
    pub sentence_count: usize,
    /// Words in the original text
    pub original_words: usize,
    /// Percentage of words removed, one decimal
    pub compression_ratio: f64,
    /// Style name as requested by the caller
    pub style: String,
    /// Failure message
    pub error: Option<String>,
}

impl SummaryResult {
    /// Flatten a typed outcome.
    ///
    /// `style` is echoed back verbatim; `original_words` is used on failure.
    pub fn from_outcome(
        outcome: Result<Summary, SummarizeError>,
        style: &str,
        original_words: usize,
    ) -> Self {
        match outcome {
            Ok(summary) => Self {
                success: true,
                summary: summary.text,
                word_count: summary.word_count,
                sentence_count: summary.sentences.len(),
                original_words: summary.original_words,
                compression_ratio: summary.compression_ratio,
                style: style.to_string(),
                error: None,
            },
            Err(err) => Self::failure(err, style, original_words),
        }
    }

    /// Build a failed result
    pub fn failure(error: SummarizeError, style: &str, original_words: usize) -> Self {
        Self {
            success: false,
            summary: String::new(),
            word_count: 0,
            sentence_count: 0,
            original_words,
            compression_ratio: 0.0,
            style: style.to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// Statistics recomputed for display by adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Words in the original text
    pub original_words: usize,
    /// Rough sentence count of the original text
    pub original_sentences: usize,
    /// Words in the summary sentences
    pub summary_words: usize,
    /// Sentences in the summary
    pub summary_sentences: usize,
    /// Percentage of words removed
    pub compression_ratio: f64,
}

impl SummaryStats {
    /// Compute display statistics for a result against its source text
    pub fn compute(original: &str, result: &SummaryResult) -> Self {
        let original_words = word_count(original);
        let (summary_words, summary_sentences) = if result.success {
            (result.word_count, result.sentence_count)
        } else {
            (0, 0)
        };

        Self {
            original_words,
            original_sentences: rough_sentence_count(original),
            summary_words,
            summary_sentences,
            compression_ratio: if result.success {
                compression_ratio(summary_words, original_words)
            } else {
                0.0
            },
        }
    }
}
