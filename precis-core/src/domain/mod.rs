//! Summarization pipeline stages
//!
//! Data flows strictly forward: raw text is normalized, segmented into
//! sentences, scored, selected under a word budget and rendered in a style.
//! None of these stages perform I/O or keep state between calls.

pub mod formatter;
pub mod normalizer;
pub mod scorer;
pub mod segmenter;
pub mod selector;
pub mod validator;
pub mod vocabulary;

pub use formatter::{render, SummaryStyle, EMPTY_SUMMARY};
pub use normalizer::normalize;
pub use scorer::{FrequencyTable, ScoreMap, Scorer, ScoringWeights};
pub use segmenter::{word_count, Segmenter, Sentence};
pub use selector::{Selected, SelectionLimits, Selector};
pub use validator::{rough_sentence_count, ValidationResult, Validator};
pub use vocabulary::Vocabulary;
