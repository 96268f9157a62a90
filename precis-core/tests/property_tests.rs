//! Property-based tests for the summarization pipeline

use precis_core::domain::{render, Segmenter, Validator};
use precis_core::{Summarizer, SummaryStyle};
use proptest::prelude::*;

/// A lowercase word of 3 to 9 letters
fn word() -> impl Strategy<Value = String> {
    "[a-z]{3,9}"
}

/// A capitalized sentence of `min..=max` words ending with a terminator
fn sentence(min: usize, max: usize) -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word(), min..=max),
        prop::sample::select(vec!['.', '!', '?']),
    )
        .prop_map(|(words, end)| {
            let mut text = words.join(" ");
            if let Some(first) = text.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            text.push(end);
            text
        })
}

/// An article of 3 to 15 segmentable sentences
fn article() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence(8, 20), 3..=15)
}

proptest! {
    #[test]
    fn summarize_is_idempotent(sentences in article(), target in 0usize..400) {
        let text = sentences.join(" ");
        let summarizer = Summarizer::new();
        let first = summarizer.summarize(&text, target, "bullets");
        let second = summarizer.summarize(&text, target, "bullets");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selection_preserves_source_order(sentences in article(), target in 1usize..400) {
        let text = sentences.join(" ");
        if let Ok(summary) = Summarizer::new().try_summarize(&text, target, SummaryStyle::Paragraph) {
            let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(summary.sentences.len() <= 6);
            for s in &summary.sentences {
                prop_assert_eq!(s.sentence.text(), sentences[s.index].as_str());
            }
        }
    }

    #[test]
    fn result_fields_are_exclusive(sentences in article(), target in 0usize..400) {
        let text = sentences.join(" ");
        let result = Summarizer::new().summarize(&text, target, "paragraph");
        prop_assert_eq!(result.success, result.error.is_none());
        prop_assert_eq!(result.success, !result.summary.is_empty());
    }

    #[test]
    fn larger_budget_never_shrinks_summary(sentences in article(), a in 0usize..300, b in 0usize..300) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let text = sentences.join(" ");
        let summarizer = Summarizer::new();
        let small = summarizer.summarize(&text, low, "paragraph");
        let large = summarizer.summarize(&text, high, "paragraph");
        if small.success && large.success {
            prop_assert!(large.word_count >= small.word_count);
        }
    }

    #[test]
    fn styles_prefix_every_line(lines in prop::collection::vec(sentence(1, 10), 1..8)) {
        let bullets = render(&lines, SummaryStyle::Bullets);
        prop_assert_eq!(bullets.lines().count(), lines.len());
        prop_assert!(bullets.lines().all(|l| l.starts_with("• ")));

        let highlights = render(&lines, SummaryStyle::Highlights);
        prop_assert_eq!(highlights.lines().count(), lines.len());
        prop_assert!(highlights.lines().all(|l| l.starts_with("→ ")));

        let paragraph = render(&lines, SummaryStyle::Paragraph);
        prop_assert_eq!(paragraph.lines().count(), 1);
        prop_assert!(!paragraph.contains('•') && !paragraph.contains('→'));
    }

    #[test]
    fn validator_rejects_under_thirty_words(words in prop::collection::vec(word(), 1..30)) {
        // One word per sentence: plenty of sentences, too few words
        let text = words.iter().map(|w| format!("{w}.")).collect::<Vec<_>>().join(" ");
        let result = Validator::default().validate(&text);
        prop_assert!(!result.is_valid);
        prop_assert!(result.word_count < 30);
    }

    #[test]
    fn validator_rejects_under_three_sentences(
        sentences in prop::collection::vec(sentence(30, 60), 1..3)
    ) {
        let text = sentences.join(" ");
        let result = Validator::default().validate(&text);
        prop_assert!(!result.is_valid);
        prop_assert_eq!(result.message, "Need at least 3 sentences for summarization.");
    }

    #[test]
    fn segmenter_keeps_only_bounded_sentences(len in 1usize..70) {
        let body: Vec<String> = (0..len).map(|i| format!("word{i}")).collect();
        let text = format!("{}.", body.join(" "));
        let kept = Segmenter::default().segment(&text);
        prop_assert_eq!(kept.len() == 1, (8..=50).contains(&len));
    }
}
