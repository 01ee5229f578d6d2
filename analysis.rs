//! Pipeline assembly: everything downstream of the loader.

use std::collections::HashSet;

use crate::stats::{self, RankedKeyword};
use crate::stopwords;
use crate::tokenize;

/// Knobs for a single run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub top_n: usize,
    pub min_len: usize,
    pub keep_numbers: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            min_len: 3,
            keep_numbers: false,
        }
    }
}

/// Summary of one run over one input.
#[derive(Debug)]
pub struct Analysis {
    /// Token count after cleaning, before stopword removal.
    pub total_words_all: usize,
    /// Token count after stopword removal; the percentage denominator.
    pub total_words_counted: usize,
    pub unique_words: usize,
    pub top_n: usize,
    pub keywords: Vec<RankedKeyword>,
}

/// Run tokenize → stopword filter → count → rank over already-loaded text.
pub fn analyze(raw_text: &str, opts: &AnalyzeOptions, stopwords: &HashSet<String>) -> Analysis {
    let tokens_all = tokenize::tokenize(raw_text, opts.keep_numbers, opts.min_len);
    let total_words_all = tokens_all.len();

    let tokens_counted = stopwords::filter_stopwords(tokens_all, stopwords);
    let total_words_counted = tokens_counted.len();

    let counts = stats::count_keywords(&tokens_counted);
    let unique_words = counts.len();

    let top = stats::top_keywords(&counts, opts.top_n);
    let keywords = stats::with_percentages(top, total_words_counted);

    Analysis {
        total_words_all,
        total_words_counted,
        unique_words,
        top_n: opts.top_n,
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::build_stopwords;

    #[test]
    fn quick_brown_fox_scenario() {
        let sw = build_stopwords(None, None);
        let opts = AnalyzeOptions {
            top_n: 3,
            ..Default::default()
        };
        let a = analyze("The quick brown fox. The QUICK Fox runs.", &opts, &sw);

        assert_eq!(a.total_words_all, 8);
        assert_eq!(a.total_words_counted, 6);
        assert_eq!(a.unique_words, 4);

        assert_eq!(a.keywords.len(), 3);
        assert_eq!(a.keywords[0].keyword, "quick");
        assert_eq!(a.keywords[0].count, 2);
        assert_eq!(a.keywords[1].keyword, "fox");
        assert_eq!(a.keywords[1].count, 2);
        assert_eq!(a.keywords[2].count, 1);
        assert!(["brown", "runs"].contains(&a.keywords[2].keyword.as_str()));
    }

    #[test]
    fn stopword_removal_never_increases_totals() {
        let sw = build_stopwords(None, None);
        let a = analyze(
            "some words and then some more words to count",
            &AnalyzeOptions::default(),
            &sw,
        );
        assert!(a.total_words_counted <= a.total_words_all);
    }

    #[test]
    fn empty_input_yields_zeroed_summary() {
        let sw = build_stopwords(None, None);
        let a = analyze("", &AnalyzeOptions::default(), &sw);

        assert_eq!(a.total_words_all, 0);
        assert_eq!(a.total_words_counted, 0);
        assert_eq!(a.unique_words, 0);
        assert!(a.keywords.is_empty());
    }

    #[test]
    fn keep_numbers_flows_through_to_the_table() {
        let sw = build_stopwords(None, None);
        let mut opts = AnalyzeOptions::default();

        let without = analyze("2025 was a year. 2025!", &opts, &sw);
        assert!(without.keywords.iter().all(|k| k.keyword != "2025"));

        opts.keep_numbers = true;
        let with = analyze("2025 was a year. 2025!", &opts, &sw);
        let hit = with.keywords.iter().find(|k| k.keyword == "2025").unwrap();
        assert_eq!(hit.count, 2);
    }
}
