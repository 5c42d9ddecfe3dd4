//! Extractive summarization.
//!
//! Sentences are scored purely on their length, the best few are kept in
//! document order and then packed into a word budget.

use crate::parsers::text::normalize;
use regex::Regex;
use std::sync::LazyLock;

/// Word budget for the ~60 second script
pub const LONG_SCRIPT_WORDS: usize = 140;

/// Word budget for the ~30 second script
pub const SHORT_SCRIPT_WORDS: usize = 75;

/// Number of top-scoring sentences considered for the summary
pub const MAX_SELECTED_SENTENCES: usize = 8;

/// Words allowed beyond the target before a sentence is skipped
pub const WORD_BUDGET_SLACK: usize = 20;

/// Sentences returned when nothing fits the budget
pub const FALLBACK_SENTENCES: usize = 3;

/// Length a sentence is rewarded for being close to
const IDEAL_SENTENCE_CHARS: i64 = 120;

/// Length beyond which a sentence gains nothing
const MAX_REWARDED_CHARS: i64 = 220;

/// Terminal punctuation followed by whitespace
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Summarizes `text` to roughly `target_words` words
pub fn summarize(text: &str, target_words: usize) -> String {
    let normalized = normalize(text);
    let sentences = split_sentences(&normalized);
    let budget = target_words + WORD_BUDGET_SLACK;

    let mut out: Vec<&str> = Vec::new();
    let mut count = 0;
    for sentence in select_sentences(&sentences) {
        let words = word_count(sentence);
        if count + words <= budget {
            out.push(sentence);
            count += words;
        } else {
            ::log::trace!("Skipping sentence of {} words (budget {})", words, budget);
        }
    }

    if out.is_empty() {
        ::log::debug!(
            "No sentence fits a budget of {} words, using the first {}",
            budget,
            FALLBACK_SENTENCES
        );
        return sentences
            .iter()
            .take(FALLBACK_SENTENCES)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
    }

    ::log::debug!(
        "Summary for target {} uses {} of {} sentences ({} words)",
        target_words,
        out.len(),
        sentences.len(),
        count
    );
    out.join(" ")
}

/// Splits text after terminal punctuation followed by whitespace
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // punctuation is a single byte
        let end = boundary.start() + 1;
        pieces.push(&text[start..end]);
        start = boundary.end();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Length score: peaks at the ideal length, falls off in both directions
pub fn score_sentence(sentence: &str) -> i64 {
    let len = sentence.chars().count() as i64;
    len.min(MAX_REWARDED_CHARS) - (len - IDEAL_SENTENCE_CHARS).abs()
}

/// Picks the top-scoring sentences and returns them in document order
///
/// Ties go to the earlier sentence.
pub fn select_sentences<'a>(sentences: &[&'a str]) -> Vec<&'a str> {
    let mut ranked = sentences
        .iter()
        .enumerate()
        .map(|(index, s)| (index, score_sentence(s)))
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(MAX_SELECTED_SENTENCES);
    ranked.sort_by_key(|&(index, _)| index);

    ranked.into_iter().map(|(index, _)| sentences[index]).collect()
}

/// Number of whitespace separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACME: &str = "Acme helps small businesses ship faster. Our platform automates the busywork. Teams report 3x throughput gains. Get started today.";

    fn sentence_of(words: usize, word: &str) -> String {
        let mut s = vec![word; words].join(" ");
        s.push('.');
        s
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("One. Two! Three? Four"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
        assert_eq!(split_sentences("v1.2 is out. Yes"), vec!["v1.2 is out.", "Yes"]);
        assert_eq!(split_sentences("Wow!! Really"), vec!["Wow!!", "Really"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_score_sentence() {
        assert_eq!(score_sentence(&"a".repeat(120)), 120);
        assert_eq!(score_sentence(&"a".repeat(100)), 80);
        assert_eq!(score_sentence(&"a".repeat(10)), -100);
        // capped at 220 then penalized for the distance from 120
        assert_eq!(score_sentence(&"a".repeat(300)), 40);
    }

    #[test]
    fn test_acme_example() {
        let summary = summarize(ACME, SHORT_SCRIPT_WORDS);
        assert_eq!(summary, ACME);
    }

    #[test]
    fn test_deterministic() {
        let text = format!("{} {} {}", ACME, sentence_of(30, "alpha"), sentence_of(12, "beta"));
        let first = summarize(&text, SHORT_SCRIPT_WORDS);
        for _ in 0..5 {
            assert_eq!(summarize(&text, SHORT_SCRIPT_WORDS), first);
        }
    }

    #[test]
    fn test_keeps_only_top_eight_in_document_order() {
        // ten sentences; the two shortest score lowest and are dropped
        let mut sentences = Vec::new();
        for i in 0..10 {
            let words = if i == 2 || i == 7 { 1 } else { 15 };
            sentences.push(sentence_of(words, &format!("w{}", i)));
        }
        let text = sentences.join(" ");

        let summary = summarize(&text, 500);
        let kept = split_sentences(&summary);
        assert_eq!(kept.len(), 8);
        assert!(!summary.contains("w2."));
        assert!(!summary.contains("w7."));

        let positions = kept
            .iter()
            .map(|s| sentences.iter().position(|orig| orig.as_str() == *s).unwrap())
            .collect::<Vec<_>>();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_respects_word_budget() {
        let text = (0..12)
            .map(|i| sentence_of(10 + i * 3, "word"))
            .collect::<Vec<_>>()
            .join(" ");

        for target in [LONG_SCRIPT_WORDS, SHORT_SCRIPT_WORDS, 30] {
            let summary = summarize(&text, target);
            assert!(!summary.is_empty());
            assert!(word_count(&summary) <= target + WORD_BUDGET_SLACK);
        }
    }

    #[test]
    fn test_skips_oversized_sentence_and_continues() {
        let big = sentence_of(120, "big");
        let small = sentence_of(18, "small");
        let text = format!("{} {}", big, small);

        let summary = summarize(&text, SHORT_SCRIPT_WORDS);
        assert_eq!(summary, small);
    }

    #[test]
    fn test_fallback_when_nothing_fits() {
        let sentences = (0..4)
            .map(|i| sentence_of(100, &format!("s{}", i)))
            .collect::<Vec<_>>();
        let text = sentences.join(" ");

        let summary = summarize(&text, SHORT_SCRIPT_WORDS);
        assert_eq!(summary, sentences[..3].join(" "));
    }

    #[test]
    fn test_normalizes_whitespace() {
        let summary = summarize("First line\n\nstill first.   Second\tsentence.", 75);
        assert_eq!(summary, "First line still first. Second sentence.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize("", LONG_SCRIPT_WORDS), "");
    }
}
