//! Frequency counting and top-N ranking.

use std::collections::HashMap;

/// A ranked keyword with its share of all counted tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedKeyword {
    pub keyword: String,
    pub count: usize,
    /// count / total counted tokens × 100; 0.0 when nothing was counted.
    pub percentage: f64,
}

/// Count occurrences per distinct token, keeping first-seen order.
/// The counts sum to the input length.
pub fn count_keywords(tokens: &[String]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }
    counts
}

/// The `n` highest counts, descending. The sort is stable over the
/// first-seen-ordered table, so equal counts rank in first-seen order.
pub fn top_keywords(counts: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    let mut ranked = counts.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Attach percentages. Rounding is left to the reporters.
pub fn with_percentages(items: Vec<(String, usize)>, total_counted: usize) -> Vec<RankedKeyword> {
    items
        .into_iter()
        .map(|(keyword, count)| {
            let percentage = if total_counted == 0 {
                0.0
            } else {
                count as f64 / total_counted as f64 * 100.0
            };
            RankedKeyword { keyword, count, percentage }
        })
        .collect()
}
