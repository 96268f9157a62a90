//! Main summarizer implementation

use std::sync::Arc;

use crate::api::config::defaults;
use crate::api::{
    compression_ratio, ConfigError, Summary, SummarizeError, SummarizerConfig, SummaryResult,
    SummarySentence,
};
use crate::domain::{
    normalize, render, word_count, Scorer, Segmenter, Selector, SummaryStyle, ValidationResult,
    Validator, Vocabulary,
};

/// Extractive summarizer.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of calls, including concurrent ones.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    vocabulary: Arc<Vocabulary>,
}

impl Summarizer {
    /// Create a summarizer with default configuration
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            vocabulary: Vocabulary::shared_english(),
        }
    }

    /// Create a summarizer with custom configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let vocabulary = if config.vocabulary.extra_stop_words.is_empty() {
            Vocabulary::shared_english()
        } else {
            Arc::new(
                Vocabulary::shared_english().with_additional(&config.vocabulary.extra_stop_words),
            )
        };
        Ok(Self { config, vocabulary })
    }

    /// Create a summarizer with an explicit vocabulary.
    ///
    /// `extra_stop_words` from the configuration are ignored; the vocabulary
    /// is used as given.
    pub fn with_vocabulary(
        config: SummarizerConfig,
        vocabulary: Arc<Vocabulary>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, vocabulary })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Get the vocabulary in use
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Summarize `text` to roughly `target_words` words.
    ///
    /// Never fails; problems are reported through [`SummaryResult::error`].
    pub fn summarize(&self, text: &str, target_words: usize, style: &str) -> SummaryResult {
        let outcome = self.try_summarize(text, target_words, SummaryStyle::parse(style));
        if let Err(err) = &outcome {
            log::warn!("Summarization failed: {err}");
        }
        SummaryResult::from_outcome(outcome, style, word_count(text))
    }

    /// Summarize with the default target length
    pub fn summarize_default(&self, text: &str) -> SummaryResult {
        self.summarize(text, defaults::TARGET_WORDS, SummaryStyle::default().as_str())
    }

    /// Typed form of [`Summarizer::summarize`]
    pub fn try_summarize(
        &self,
        text: &str,
        target_words: usize,
        style: SummaryStyle,
    ) -> Result<Summary, SummarizeError> {
        if text.is_empty() {
            return Err(SummarizeError::InvalidInput);
        }

        let normalized = normalize(text);
        let segmenter = Segmenter::new(
            self.config.segmentation.min_sentence_words,
            self.config.segmentation.max_sentence_words,
        );
        let sentences = segmenter.segment(&normalized);
        log::debug!("Segmented {} usable sentences", sentences.len());

        let required = self.config.validation.min_sentences;
        if sentences.len() < required {
            return Err(SummarizeError::TooFewSentences {
                found: sentences.len(),
                required,
            });
        }

        let scorer = Scorer::new(&self.vocabulary, self.config.scoring_weights());
        let scores = scorer.score(&sentences, &normalized);
        if scores.is_empty() {
            return Err(SummarizeError::NoScorableContent);
        }
        if let Some(index) = scores.first_non_finite() {
            return Err(SummarizeError::Processing(format!(
                "non-finite score for sentence {index}"
            )));
        }

        let selector = Selector::new(self.config.selection_limits());
        let selected = selector.select(&sentences, &scores, target_words);
        if selected.is_empty() {
            return Err(SummarizeError::EmptySelection);
        }
        log::debug!(
            "Selected {} of {} sentences for a {target_words}-word target",
            selected.len(),
            sentences.len()
        );

        let picked: Vec<&str> = selected.iter().map(|s| s.sentence.text()).collect();
        let summary_words: usize = selected.iter().map(|s| s.sentence.word_count()).sum();
        let original_words = word_count(text);

        Ok(Summary {
            text: render(&picked, style),
            sentences: selected
                .into_iter()
                .map(|s| SummarySentence {
                    index: s.index,
                    sentence: s.sentence.clone(),
                })
                .collect(),
            style,
            word_count: summary_words,
            original_words,
            compression_ratio: compression_ratio(summary_words, original_words),
        })
    }

    /// Run the pre-flight check with this summarizer's thresholds
    pub fn validate(&self, text: &str) -> ValidationResult {
        let validator = Validator::new(
            self.config.validation.min_words,
            self.config.validation.min_sentences,
        );
        validator.validate(text)
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Summarize text with default configuration
pub fn summarize(text: &str, target_words: usize, style: &str) -> SummaryResult {
    Summarizer::new().summarize(text, target_words, style)
}

/// Validate text with default thresholds
pub fn validate(text: &str) -> ValidationResult {
    Summarizer::new().validate(text)
}
