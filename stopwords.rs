//! Stopword set construction and token filtering.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::warn;

/// Built-in English stopword list. Read-only, shared by every run.
pub static DEFAULT_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did",
        "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few",
        "for", "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
        "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him",
        "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into",
        "is", "isn't", "it", "it's", "its", "itself", "let's", "me", "more", "most", "mustn't",
        "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
        "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she",
        "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
        "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
        "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through",
        "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
        "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
        "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
        "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
        "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Merge the default list with an optional comma-separated list and an
/// optional newline-delimited file. An unreadable file is a warning, not an
/// error; the run keeps whatever was merged so far.
pub fn build_stopwords(extra_csv: Option<&str>, file_path: Option<&Path>) -> HashSet<String> {
    let mut set: HashSet<String> = DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect();

    if let Some(csv) = extra_csv {
        for word in csv.split(',') {
            let word = word.trim().to_lowercase();
            if !word.is_empty() {
                set.insert(word);
            }
        }
    }

    if let Some(path) = file_path {
        match fs::read_to_string(path) {
            Ok(contents) => {
                for line in contents.lines() {
                    let word = line.trim().to_lowercase();
                    if !word.is_empty() {
                        set.insert(word);
                    }
                }
            }
            Err(e) => warn!("could not read stopwords file {}: {}", path.display(), e),
        }
    }

    set
}

/// Drop tokens present in the stopword set.
pub fn filter_stopwords(tokens: Vec<String>, stopwords: &HashSet<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !stopwords.contains(t.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_vec(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_cover_common_words() {
        assert!(DEFAULT_STOPWORDS.contains("the"));
        assert!(DEFAULT_STOPWORDS.contains("aren't"));
        assert!(!DEFAULT_STOPWORDS.contains("keyword"));
    }

    #[test]
    fn extra_csv_entries_are_trimmed_and_lowercased() {
        let set = build_stopwords(Some(" Foo, BAR ,,baz"), None);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert!(set.contains("baz"));
        assert!(set.contains("the"));
    }

    #[test]
    fn stopwords_file_extends_the_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "Alpha\n\n  beta  \n").unwrap();

        let set = build_stopwords(None, Some(&path));
        assert!(set.contains("alpha"));
        assert!(set.contains("beta"));
    }

    #[test]
    fn missing_stopwords_file_leaves_set_unchanged() {
        let with_missing = build_stopwords(None, Some(Path::new("/no/such/stopwords.txt")));
        let without = build_stopwords(None, None);
        assert_eq!(with_missing, without);
    }

    #[test]
    fn filter_never_grows_the_sequence() {
        let set = build_stopwords(None, None);
        let tokens = to_vec(&["the", "quick", "brown", "fox", "the"]);
        let kept = filter_stopwords(tokens.clone(), &set);
        assert!(kept.len() <= tokens.len());
        assert_eq!(kept, to_vec(&["quick", "brown", "fox"]));
    }
}
