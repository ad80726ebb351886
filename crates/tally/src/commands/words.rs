//! Words command — word frequency ranking for a text file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tally_core::corpus::TopN;
use tally_core::frequency::{self, Ranking};
use tally_core::{stopwords, tokenize};

use super::read_input_file;

/// Fallback stopword language when neither flag nor config set one.
const DEFAULT_LANGUAGE: &str = "english";

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// File to analyze.
    #[arg(required_unless_present = "list_languages")]
    pub file: Option<Utf8PathBuf>,

    /// Stopword language.
    #[arg(short, long)]
    pub language: Option<String>,

    /// How many entries to show.
    #[arg(short, long, value_enum)]
    pub top: Option<TopN>,

    /// List supported stopword languages and exit.
    #[arg(long)]
    pub list_languages: bool,
}

/// Word frequency report for one file.
#[derive(Debug, Serialize)]
pub struct WordsReport {
    /// File that was analyzed.
    pub file: Utf8PathBuf,
    /// Stopword language used.
    pub language: String,
    /// Tokens counted after stopword removal.
    pub total_words: usize,
    /// Distinct tokens counted.
    pub distinct_words: usize,
    /// The requested cut of the ranking.
    pub entries: Ranking<String>,
}

/// Rank word frequencies in a text file.
#[instrument(name = "cmd_words", skip_all)]
pub fn cmd_words(
    args: WordsArgs,
    global_json: bool,
    config_language: Option<&str>,
    config_top: Option<TopN>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    if args.list_languages {
        if global_json {
            println!(
                "{}",
                serde_json::to_string_pretty(stopwords::SUPPORTED_LANGUAGES)?
            );
        } else {
            for language in stopwords::SUPPORTED_LANGUAGES {
                println!("{language}");
            }
        }
        return Ok(());
    }

    // required_unless_present guarantees the file is set past this point
    let Some(file) = args.file else {
        anyhow::bail!("no file given");
    };
    let language = args
        .language
        .as_deref()
        .or(config_language)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string();
    let top = args.top.or(config_top).unwrap_or_default();
    debug!(file = %file, language = %language, top = %top, "executing words command");

    let content = read_input_file(&file, max_input_bytes)?;

    let stopset = stopwords::for_language(&language)?;
    let corpus = tokenize::tokenize_text(&content, &stopset);

    let full = frequency::rank(&corpus, TopN::All)
        .with_context(|| format!("nothing to rank in {file}"))?;
    let distinct_words = full.len();
    let mut entries = full;
    if let Some(limit) = top.limit() {
        entries.truncate(limit);
    }

    let report = WordsReport {
        file,
        language,
        total_words: corpus.len(),
        distinct_words,
        entries,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.file.bold());
    println!(
        "\n  {} {} words, {} distinct ({} stopwords removed)",
        "Corpus:".cyan(),
        report.total_words,
        report.distinct_words,
        report.language,
    );
    println!();
    for entry in &report.entries {
        println!(
            "  {:<20} {:>6}  {:>7.2}%",
            entry.token, entry.count, entry.percentage,
        );
    }

    Ok(())
}
