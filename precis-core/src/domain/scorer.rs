//! Sentence relevance scoring
//!
//! Each sentence is scored as
//!
//! ```text
//! score = mean corpus frequency of its content tokens
//!       * position bonus (lead / tail / body)
//!       * min(content tokens / length normalizer, length cap)
//! ```
//!
//! Frequencies are counted once over the whole normalized text.

use super::segmenter::Sentence;
use super::vocabulary::Vocabulary;
use std::collections::HashMap;

/// Tunable weights for [`Scorer`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Sentences with `index < lead_fraction * count` get `lead_bonus`
    pub lead_fraction: f64,
    /// Bonus for lead sentences
    pub lead_bonus: f64,
    /// Sentences with `index > tail_fraction * count` get `tail_bonus`
    pub tail_fraction: f64,
    /// Bonus for closing sentences
    pub tail_bonus: f64,
    /// Content-token count giving a length factor of 1.0
    pub length_normalizer: f64,
    /// Upper bound of the length factor
    pub length_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lead_fraction: 0.15,
            lead_bonus: 1.4,
            tail_fraction: 0.85,
            tail_bonus: 1.2,
            length_normalizer: 12.0,
            length_cap: 1.2,
        }
    }
}

impl ScoringWeights {
    /// Position multiplier for the sentence at `index` out of `count`
    pub fn position_bonus(&self, index: usize, count: usize) -> f64 {
        let index = index as f64;
        let count = count as f64;
        if index < self.lead_fraction * count {
            self.lead_bonus
        } else if index > self.tail_fraction * count {
            self.tail_bonus
        } else {
            1.0
        }
    }

    /// Length multiplier for a sentence with `content_tokens` content tokens
    pub fn length_factor(&self, content_tokens: usize) -> f64 {
        (content_tokens as f64 / self.length_normalizer).min(self.length_cap)
    }
}

/// Corpus-wide content-token counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count content tokens of `text`
    pub fn build(text: &str, vocabulary: &Vocabulary) -> Self {
        let mut counts = HashMap::new();
        for token in vocabulary.content_tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `token`, zero when absent
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct content tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the text had no content tokens at all
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Score per sentence, indexed by the sentence's position in the segmented list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    scores: Vec<f64>,
}

impl ScoreMap {
    /// Wrap precomputed scores; index `i` belongs to sentence `i`
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Score of sentence `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether nothing could be scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(index, score)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().copied().enumerate()
    }

    /// Index of the first non-finite score, if any
    pub fn first_non_finite(&self) -> Option<usize> {
        self.scores.iter().position(|s| !s.is_finite())
    }

    /// Sentence indices by descending score. Equal scores keep ascending index
    /// order.
    pub fn ranked(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]));
        indices
    }
}

/// Frequency, position and length based sentence scorer
#[derive(Debug, Clone)]
pub struct Scorer<'a> {
    vocabulary: &'a Vocabulary,
    weights: ScoringWeights,
}

impl<'a> Scorer<'a> {
    /// Create a scorer over `vocabulary`
    pub fn new(vocabulary: &'a Vocabulary, weights: ScoringWeights) -> Self {
        Self {
            vocabulary,
            weights,
        }
    }

    /// Score every sentence against the term frequencies of `full_text`.
    ///
    /// Returns an empty map when `full_text` has no content tokens.
    pub fn score(&self, sentences: &[Sentence], full_text: &str) -> ScoreMap {
        let table = FrequencyTable::build(full_text, self.vocabulary);
        if table.is_empty() {
            return ScoreMap::default();
        }
        log::debug!("Content vocabulary: {} distinct tokens", table.len());

        let count = sentences.len();
        let scores = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| self.score_sentence(sentence, index, count, &table))
            .collect();

        ScoreMap::from_scores(scores)
    }

    fn score_sentence(
        &self,
        sentence: &Sentence,
        index: usize,
        count: usize,
        table: &FrequencyTable,
    ) -> f64 {
        let tokens = self.vocabulary.content_tokens(sentence.text());
        if tokens.is_empty() {
            return 0.0;
        }

        let total: usize = tokens.iter().map(|t| table.get(t)).sum();
        let freq_score = total as f64 / tokens.len() as f64;

        freq_score
            * self.weights.position_bonus(index, count)
            * self.weights.length_factor(tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_position_bonus_boundaries() {
        let weights = ScoringWeights::default();
        // 20 sentences: lead is index < 3.0, tail is index > 17.0
        assert_eq!(weights.position_bonus(0, 20), 1.4);
        assert_eq!(weights.position_bonus(2, 20), 1.4);
        assert_eq!(weights.position_bonus(3, 20), 1.0);
        assert_eq!(weights.position_bonus(17, 20), 1.0);
        assert_eq!(weights.position_bonus(18, 20), 1.2);
    }

    #[test]
    fn test_position_bonus_small_counts() {
        let weights = ScoringWeights::default();
        // 3 sentences: lead is index < 0.45, tail is index > 2.55
        assert_eq!(weights.position_bonus(0, 3), 1.4);
        assert_eq!(weights.position_bonus(1, 3), 1.0);
        assert_eq!(weights.position_bonus(2, 3), 1.0);
    }

    #[test]
    fn test_length_factor_capped() {
        let weights = ScoringWeights::default();
        assert!(approx(weights.length_factor(6), 0.5));
        assert!(approx(weights.length_factor(12), 1.0));
        assert!(approx(weights.length_factor(100), 1.2));
    }

    #[test]
    fn test_frequency_table() {
        let vocab = Vocabulary::english();
        let table = FrequencyTable::build("Rust is fast. Rust is safe.", &vocab);
        assert_eq!(table.get("rust"), 2);
        assert_eq!(table.get("fast"), 1);
        assert_eq!(table.get("is"), 0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_table_yields_empty_map() {
        let vocab = Vocabulary::english();
        let scorer = Scorer::new(&vocab, ScoringWeights::default());
        let sentences = vec![Sentence::new("It is what it is and that is that.")];
        let scores = scorer.score(&sentences, "It is what it is and that is that.");
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sentence_without_content_scores_zero() {
        let vocab = Vocabulary::english();
        let scorer = Scorer::new(&vocab, ScoringWeights::default());
        let sentences = vec![
            Sentence::new("Gardens need water."),
            Sentence::new("It is what it is."),
        ];
        let scores = scorer.score(&sentences, "Gardens need water. It is what it is.");
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(1), Some(0.0));
    }

    #[test]
    fn test_score_formula() {
        let vocab = Vocabulary::english();
        let scorer = Scorer::new(&vocab, ScoringWeights::default());
        let text = "Solar power grows. Solar panels shine. Wind turbines spin.";
        let sentences = vec![
            Sentence::new("Solar power grows."),
            Sentence::new("Solar panels shine."),
            Sentence::new("Wind turbines spin."),
        ];
        let scores = scorer.score(&sentences, text);

        // solar=2, power=1, grows=1 -> mean 4/3, lead bonus, 3/12 length
        assert!(approx(scores.get(0).unwrap(), 4.0 / 3.0 * 1.4 * 0.25));
        // solar=2, panels=1, shine=1 -> mean 4/3, body, 3/12 length
        assert!(approx(scores.get(1).unwrap(), 4.0 / 3.0 * 0.25));
        // all ones -> mean 1, body (2 > 2.55 is false), 3/12 length
        assert!(approx(scores.get(2).unwrap(), 0.25));
    }

    #[test]
    fn test_ranked_descending_with_index_tiebreak() {
        let scores = ScoreMap::from_scores(vec![1.0, 3.0, 1.0, 3.0, 2.0]);
        assert_eq!(scores.ranked(), vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn test_first_non_finite() {
        let scores = ScoreMap::from_scores(vec![1.0, f64::NAN]);
        assert_eq!(scores.first_non_finite(), Some(1));
        assert_eq!(ScoreMap::from_scores(vec![0.0]).first_non_finite(), None);
    }
}
