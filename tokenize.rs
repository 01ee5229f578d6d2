//! Text normalization and word extraction.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

// Compile regexes once
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z']+").unwrap());
static WORD_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9']+").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)?\b").unwrap());

/// Lowercase `text` and extract word tokens in order of appearance.
///
/// Without `keep_numbers`, integer/decimal substrings are blanked out before
/// extraction. With it, digit runs are extracted like words, so `2025` is a
/// token. Leading/trailing apostrophes are trimmed; tokens shorter than
/// `min_len` are dropped.
pub fn tokenize(text: &str, keep_numbers: bool, min_len: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let (cleaned, word_re): (Cow<'_, str>, &Regex) = if keep_numbers {
        (Cow::Borrowed(lowered.as_str()), &*WORD_NUM_RE)
    } else {
        (NUMBER_RE.replace_all(&lowered, " "), &*WORD_RE)
    };

    word_re
        .find_iter(&cleaned)
        .map(|m| m.as_str().trim_matches('\''))
        .filter(|t| !t.is_empty() && t.len() >= min_len)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_preserves_order() {
        let tokens = tokenize("The quick brown fox. The QUICK Fox runs.", false, 3);
        assert_eq!(
            tokens,
            vec!["the", "quick", "brown", "fox", "the", "quick", "fox", "runs"]
        );
    }

    #[test]
    fn tokenizing_twice_is_identical() {
        let text = "Repeatable input, repeatable OUTPUT; 12.5 times over.";
        assert_eq!(tokenize(text, false, 3), tokenize(text, false, 3));
    }

    #[test]
    fn numbers_removed_by_default() {
        let tokens = tokenize("2025 was a year. 2025!", false, 3);
        assert_eq!(tokens, vec!["was", "year"]);
    }

    #[test]
    fn keep_numbers_retains_digit_runs() {
        let tokens = tokenize("2025 was a year. 2025!", true, 3);
        assert_eq!(tokens, vec!["2025", "was", "year", "2025"]);
    }

    #[test]
    fn decimal_and_separated_numbers_are_blanked() {
        let tokens = tokenize("pi is 3.14 and a thousand is 1,000", false, 2);
        assert_eq!(tokens, vec!["pi", "is", "and", "thousand", "is"]);
    }

    #[test]
    fn trims_surrounding_apostrophes() {
        let tokens = tokenize("'twas the dog's day, rock 'n' roll", false, 3);
        assert_eq!(tokens, vec!["twas", "the", "dog's", "day", "rock", "roll"]);
    }

    #[test]
    fn min_len_filters_short_tokens() {
        let tokens = tokenize("a to the word", false, 3);
        assert_eq!(tokens, vec!["the", "word"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("", false, 3).is_empty());
        assert!(tokenize("   \n\t  ", false, 3).is_empty());
    }
}
