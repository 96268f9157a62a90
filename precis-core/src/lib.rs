//! Extractive text summarization
//!
//! Picks the most informative sentences of an article and presents them in
//! source order. Sentences are scored by the mean corpus frequency of their
//! content words, weighted by position and density, then selected greedily
//! under a soft word budget.
//!
//! # Architecture
//!
//! - **Domain layer**: the pipeline stages (normalizer, segmenter, scorer,
//!   selector, formatter, validator) as pure functions of their inputs
//! - **API layer**: configuration, display statistics and the [`Summarizer`]
//!   entry point returning flat [`SummaryResult`] values
//!
//! # Example
//!
//! ```rust
//! use precis_core::Summarizer;
//!
//! let text = "Solar power is now the cheapest source of new electricity in many regions. \
//!     Falling panel prices have pushed solar power into markets that once relied on coal. \
//!     Grid operators are adding batteries so that solar power can be used after sunset. \
//!     Critics point out that storage still adds cost to every solar power project built today.";
//!
//! let summarizer = Summarizer::new();
//! let result = summarizer.summarize(text, 40, "bullets");
//! assert!(result.success);
//! assert!(result.summary.starts_with("• "));
//! ```

pub mod api;
pub mod domain;

pub use api::{
    summarize, validate, ConfigBuilder, ConfigError, LengthTier, SummarizeError, Summarizer,
    SummarizerConfig, Summary, SummaryResult, SummarySentence, SummaryStats,
};
pub use domain::{Sentence, SummaryStyle, ValidationResult, Vocabulary};
