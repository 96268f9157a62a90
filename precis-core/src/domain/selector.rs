//! Budgeted greedy sentence selection
//!
//! Walks sentences from highest to lowest score, adding them while the running
//! word count stays under the overshoot limit, and stops once the budget is
//! satisfied. The selection is returned in source order.

use super::scorer::ScoreMap;
use super::segmenter::Sentence;

/// Limits applied by [`Selector`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionLimits {
    /// Hard cap on selected sentences
    pub max_sentences: usize,
    /// Articles this short may be selected in full
    pub min_sentences: usize,
    /// Running total may not exceed `target * overshoot`
    pub overshoot: f64,
    /// A too-long sentence is still taken while the total is below `target * floor`
    pub floor: f64,
    /// Selection stops once the total reaches `target * satisfied`
    pub satisfied: f64,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_sentences: 6,
            min_sentences: 3,
            overshoot: 1.3,
            floor: 0.6,
            satisfied: 0.8,
        }
    }
}

impl SelectionLimits {
    /// Number of ranked candidates considered for `sentence_count` sentences.
    ///
    /// Half the article and never more than `max_sentences`. An article of at
    /// most `min_sentences` sentences, the shortest the pipeline accepts, may
    /// be taken whole.
    pub fn candidate_cap(&self, sentence_count: usize) -> usize {
        let cap = if sentence_count <= self.min_sentences {
            sentence_count
        } else {
            sentence_count / 2
        };
        cap.min(self.max_sentences)
    }
}

/// A sentence picked for the summary with its index in the segmented list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected<'a> {
    /// Position in the segmented sentence list
    pub index: usize,
    /// The sentence itself
    pub sentence: &'a Sentence,
}

/// Greedy selector over a score map
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    limits: SelectionLimits,
}

impl Selector {
    /// Create a selector with the given limits
    pub fn new(limits: SelectionLimits) -> Self {
        Self { limits }
    }

    /// Pick sentences for a summary of roughly `target_words` words.
    ///
    /// The result is sorted by ascending index. It is empty only when
    /// `sentences` is.
    pub fn select<'a>(
        &self,
        sentences: &'a [Sentence],
        scores: &ScoreMap,
        target_words: usize,
    ) -> Vec<Selected<'a>> {
        let target = target_words as f64;
        let ceiling = target * self.limits.overshoot;
        let floor = target * self.limits.floor;
        let satisfied = target * self.limits.satisfied;

        let cap = self.limits.candidate_cap(sentences.len());
        let mut picked: Vec<usize> = Vec::with_capacity(cap);
        let mut total = 0usize;

        for index in scores
            .ranked()
            .into_iter()
            .filter(|&i| i < sentences.len())
            .take(cap)
        {
            let words = sentences[index].word_count();

            if (total + words) as f64 > ceiling {
                if (total as f64) < floor {
                    picked.push(index);
                }
                break;
            }

            picked.push(index);
            total += words;
            if total as f64 >= satisfied {
                break;
            }
        }

        if picked.is_empty() && !sentences.is_empty() {
            log::debug!("No sentence fit the budget, falling back to the first sentence");
            picked.push(0);
        }

        picked.sort_unstable();
        picked
            .into_iter()
            .map(|index| Selected {
                index,
                sentence: &sentences[index],
            })
            .collect()
    }
}
