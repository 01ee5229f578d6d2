//! Reporters: console summary, CSV export, highlighted preview.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use itertools::Itertools;
use regex::RegexBuilder;

use crate::analysis::Analysis;
use crate::stats::RankedKeyword;

const PREVIEW_MAX_CHARS: usize = 4000; // highlight preview cut-off
const TRUNCATION_MARKER: &str = "\n...[truncated]...";

/// Render the fixed-width console summary. The caller prints it to stdout.
pub fn render_summary(analysis: &Analysis) -> String {
    let mut out = String::new();
    writeln!(out, "\n=== Keyword Density Summary ===").unwrap();
    writeln!(
        out,
        "Total words (cleaned, before stopwords): {}",
        analysis.total_words_all
    )
    .unwrap();
    writeln!(
        out,
        "Total words (after stopwords removed):  {}",
        analysis.total_words_counted
    )
    .unwrap();
    writeln!(
        out,
        "Unique words (after stopwords removed): {}",
        analysis.unique_words
    )
    .unwrap();
    writeln!(out, "Top N: {}", analysis.top_n).unwrap();

    writeln!(out, "\nTop keywords:").unwrap();
    if analysis.keywords.is_empty() {
        writeln!(out, "(No keywords found with current settings.)").unwrap();
    } else {
        writeln!(out, "{:<20} {:>8} {:>9}", "Keyword", "Count", "Percent").unwrap();
        writeln!(out, "{}", "-".repeat(40)).unwrap();
        for kw in &analysis.keywords {
            writeln!(
                out,
                "{:<20} {:>8} {:>8.2}%",
                kw.keyword, kw.count, kw.percentage
            )
            .unwrap();
        }
    }
    out
}

/// Write `keyword,count,percentage` rows. Keywords are letter/digit/apostrophe
/// runs, so no quoting is needed.
pub fn write_csv(path: &Path, rows: &[RankedKeyword]) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "keyword,count,percentage")?;
    for row in rows {
        writeln!(file, "{},{},{:.2}", row.keyword, row.count, row.percentage)?;
    }
    Ok(())
}

/// Wrap every case-insensitive whole-word match of a keyword in `**…**`.
/// Alternation is built longest-first so overlap between keywords never
/// changes which one a match is attributed to.
pub fn highlight(text: &str, keywords: &[String]) -> String {
    let mut kws: Vec<String> = keywords
        .iter()
        .map(|k| k.to_lowercase())
        .unique()
        .collect();
    if kws.is_empty() {
        return text.to_string();
    }
    kws.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let pattern = format!(
        r"\b({})\b",
        kws.iter().map(|k| regex::escape(k)).join("|")
    );
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .unwrap();
    re.replace_all(text, |caps: &regex::Captures| format!("**{}**", &caps[0]))
        .into_owned()
}

/// Cap the preview at [`PREVIEW_MAX_CHARS`] characters, char-boundary safe.
pub fn truncate_preview(preview: &str) -> String {
    match preview.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((idx, _)) => format!("{}{}", &preview[..idx], TRUNCATION_MARKER),
        None => preview.to_string(),
    }
}
