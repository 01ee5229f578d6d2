use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser};
use tracing::warn;
use url::Url;

mod analysis;
mod error;
mod report;
mod source;
mod stats;
mod stopwords;
mod tokenize;
mod web;

use analysis::AnalyzeOptions;
use error::Result;
use source::TextSource;

#[derive(Parser, Debug)]
#[command(
    name = "kwdensity",
    version,
    about = "Keyword density analyzer for web pages, text files, and raw strings"
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// How many top keywords to show
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Minimum token length to count
    #[arg(long, default_value_t = 3)]
    min_len: usize,

    /// Keep numbers (e.g., 2025) as tokens
    #[arg(long)]
    keep_numbers: bool,

    /// Optional path to save results as CSV (keyword,count,percentage)
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Comma-separated words to ignore additionally
    #[arg(long, value_name = "WORDS")]
    extra_stopwords: Option<String>,

    /// Path to a newline-delimited stopwords file to extend the list
    #[arg(long, value_name = "PATH")]
    stopwords_file: Option<PathBuf>,

    /// Print the text with top keywords highlighted
    #[arg(long)]
    show_highlight: bool,

    /// HTTP timeout in seconds for URL mode
    #[arg(long, default_value_t = 20)]
    timeout: u64,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Webpage URL to analyze
    #[arg(long)]
    url: Option<String>,

    /// Path to a local text/markdown file to analyze
    #[arg(long)]
    file: Option<PathBuf>,

    /// Analyze this raw text string (quotes recommended)
    #[arg(long)]
    text: Option<String>,
}

impl SourceArgs {
    fn into_source(self) -> Result<TextSource> {
        if let Some(raw) = self.url {
            return Ok(TextSource::Url(Url::parse(&raw)?));
        }
        if let Some(path) = self.file {
            return Ok(TextSource::File(path));
        }
        // clap guarantees exactly one selector is present
        Ok(TextSource::Inline(self.text.unwrap_or_default()))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    // Missing --file path is rejected before the pipeline runs.
    if let Some(path) = &cli.source.file {
        if !path.exists() {
            eprintln!("Error: file path not found.");
            return ExitCode::from(2);
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stopword_set = stopwords::build_stopwords(
        cli.extra_stopwords.as_deref(),
        cli.stopwords_file.as_deref(),
    );

    let source = cli.source.into_source()?;
    let raw_text = source.load(Duration::from_secs(cli.timeout))?;

    let opts = AnalyzeOptions {
        top_n: cli.top,
        min_len: cli.min_len,
        keep_numbers: cli.keep_numbers,
    };
    let analysis = analysis::analyze(&raw_text, &opts, &stopword_set);

    print!("{}", report::render_summary(&analysis));

    if let Some(path) = &cli.export_csv {
        match report::write_csv(path, &analysis.keywords) {
            Ok(()) => println!("\nSaved CSV -> {}", path.display()),
            Err(e) => warn!("could not save CSV to {}: {}", path.display(), e),
        }
    }

    if cli.show_highlight {
        let top_words: Vec<String> = analysis
            .keywords
            .iter()
            .map(|k| k.keyword.clone())
            .collect();
        println!("\n=== Highlighted Text Preview ===");
        let preview = report::highlight(&raw_text, &top_words);
        println!("{}", report::truncate_preview(&preview));
    }

    Ok(())
}
