//! Configuration API for summarization

use crate::api::ConfigError;
use crate::domain::{scorer::ScoringWeights, segmenter, selector::SelectionLimits, validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Target summary length in words
    pub const TARGET_WORDS: usize = 150;

    /// Target used by the demo runs
    pub const DEMO_TARGET_WORDS: usize = 100;
}

/// Summarizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Sentence word bounds
    pub segmentation: SegmentationConfig,
    /// Sentence scoring weights
    pub scoring: ScoringConfig,
    /// Greedy selection limits
    pub selection: SelectionConfig,
    /// Pre-flight thresholds
    pub validation: ValidationConfig,
    /// Stop-word adjustments
    pub vocabulary: VocabularyConfig,
}

/// Segmentation bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentationConfig {
    /// Shortest sentence kept, in words
    pub min_sentence_words: usize,
    /// Longest sentence kept, in words
    pub max_sentence_words: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_sentence_words: segmenter::DEFAULT_MIN_WORDS,
            max_sentence_words: segmenter::DEFAULT_MAX_WORDS,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Leading fraction of sentences receiving `lead_bonus`
    pub lead_fraction: f64,
    /// Multiplier for lead sentences
    pub lead_bonus: f64,
    /// Sentences past this fraction receive `tail_bonus`
    pub tail_fraction: f64,
    /// Multiplier for closing sentences
    pub tail_bonus: f64,
    /// Content tokens giving a length factor of 1.0
    pub length_normalizer: f64,
    /// Maximum length factor
    pub length_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            lead_fraction: weights.lead_fraction,
            lead_bonus: weights.lead_bonus,
            tail_fraction: weights.tail_fraction,
            tail_bonus: weights.tail_bonus,
            length_normalizer: weights.length_normalizer,
            length_cap: weights.length_cap,
        }
    }
}

/// Selection limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Most sentences a summary may contain
    pub max_sentences: usize,
    /// Articles with at most this many sentences may be selected whole
    pub min_sentences: usize,
    /// Overshoot multiplier of the target
    pub overshoot: f64,
    /// Floor multiplier of the target
    pub floor: f64,
    /// Satisfied multiplier of the target
    pub satisfied: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        let limits = SelectionLimits::default();
        Self {
            max_sentences: limits.max_sentences,
            min_sentences: limits.min_sentences,
            overshoot: limits.overshoot,
            floor: limits.floor,
            satisfied: limits.satisfied,
        }
    }
}

/// Validation thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Fewest words accepted by the validator
    pub min_words: usize,
    /// Fewest sentences accepted by the validator and the pipeline
    pub min_sentences: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_words: validator::DEFAULT_MIN_WORDS,
            min_sentences: validator::DEFAULT_MIN_SENTENCES,
        }
    }
}

/// Stop-word adjustments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Words ignored in addition to the built-in English stop words
    pub extra_stop_words: Vec<String>,
}

impl SummarizerConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SummarizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scoring weights derived from this configuration
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            lead_fraction: self.scoring.lead_fraction,
            lead_bonus: self.scoring.lead_bonus,
            tail_fraction: self.scoring.tail_fraction,
            tail_bonus: self.scoring.tail_bonus,
            length_normalizer: self.scoring.length_normalizer,
            length_cap: self.scoring.length_cap,
        }
    }

    /// Selection limits derived from this configuration
    pub fn selection_limits(&self) -> SelectionLimits {
        SelectionLimits {
            max_sentences: self.selection.max_sentences,
            min_sentences: self.selection.min_sentences,
            overshoot: self.selection.overshoot,
            floor: self.selection.floor,
            satisfied: self.selection.satisfied,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seg = &self.segmentation;
        if seg.min_sentence_words == 0 {
            return Err(invalid("min_sentence_words must be greater than 0"));
        }
        if seg.min_sentence_words > seg.max_sentence_words {
            return Err(invalid(format!(
                "min_sentence_words ({}) exceeds max_sentence_words ({})",
                seg.min_sentence_words, seg.max_sentence_words
            )));
        }

        let scoring = &self.scoring;
        for (name, value) in [
            ("lead_fraction", scoring.lead_fraction),
            ("tail_fraction", scoring.tail_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if scoring.lead_fraction > scoring.tail_fraction {
            return Err(invalid("lead_fraction must not exceed tail_fraction"));
        }
        for (name, value) in [
            ("lead_bonus", scoring.lead_bonus),
            ("tail_bonus", scoring.tail_bonus),
            ("length_normalizer", scoring.length_normalizer),
            ("length_cap", scoring.length_cap),
            ("overshoot", self.selection.overshoot),
            ("floor", self.selection.floor),
            ("satisfied", self.selection.satisfied),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be a positive number, got {value}")));
            }
        }

        let sel = &self.selection;
        if sel.max_sentences == 0 {
            return Err(invalid("max_sentences must be greater than 0"));
        }
        if sel.floor > sel.satisfied || sel.satisfied > sel.overshoot {
            return Err(invalid(
                "selection multipliers must satisfy floor <= satisfied <= overshoot",
            ));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

/// Fluent builder for [`SummarizerConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: SummarizerConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set sentence word bounds
    pub fn sentence_words(mut self, min: usize, max: usize) -> Self {
        self.config.segmentation.min_sentence_words = min;
        self.config.segmentation.max_sentence_words = max;
        self
    }

    /// Set the most sentences a summary may contain
    pub fn max_sentences(mut self, count: usize) -> Self {
        self.config.selection.max_sentences = count;
        self
    }

    /// Set the sentence count up to which an article may be selected whole
    pub fn min_candidates(mut self, count: usize) -> Self {
        self.config.selection.min_sentences = count;
        self
    }

    /// Set the validator thresholds
    pub fn validation(mut self, min_words: usize, min_sentences: usize) -> Self {
        self.config.validation.min_words = min_words;
        self.config.validation.min_sentences = min_sentences;
        self
    }

    /// Replace the scoring weights
    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Add stop words on top of the built-in English list
    pub fn extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .vocabulary
            .extra_stop_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SummarizerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Summary length presets offered to interactive users
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    /// 50–100 words
    Short,
    /// 100–200 words
    #[default]
    Medium,
    /// 200–300 words
    Long,
}

impl LengthTier {
    /// Inclusive word range of this tier
    pub fn target_range(&self) -> (usize, usize) {
        match self {
            LengthTier::Short => (50, 100),
            LengthTier::Medium => (100, 200),
            LengthTier::Long => (200, 300),
        }
    }

    /// Target used when the caller does not pick a value within the range
    pub fn default_target(&self) -> usize {
        match self {
            LengthTier::Short => 75,
            LengthTier::Medium => defaults::TARGET_WORDS,
            LengthTier::Long => 250,
        }
    }

    /// Clamp `words` into this tier's range
    pub fn clamp(&self, words: usize) -> usize {
        let (low, high) = self.target_range();
        words.clamp(low, high)
    }
}

impl fmt::Display for LengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Long => "long",
        };
        f.write_str(name)
    }
}

impl FromStr for LengthTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(LengthTier::Short),
            "medium" => Ok(LengthTier::Medium),
            "long" => Ok(LengthTier::Long),
            other => Err(invalid(format!("unknown length tier: {other}"))),
        }
    }
}
