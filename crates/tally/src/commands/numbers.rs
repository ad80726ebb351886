//! Numbers command — value frequency ranking for a CSV column.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tally_core::corpus::{Number, TopN};
use tally_core::frequency::{self, Ranking};
use tally_core::stats::{self, ColumnSummary};
use tally_core::tokenize;

use super::read_input_file;

/// Arguments for the `numbers` subcommand.
#[derive(Args, Debug)]
pub struct NumbersArgs {
    /// CSV file to analyze.
    pub file: Utf8PathBuf,

    /// Name of the column to analyze.
    #[arg(long)]
    pub column: String,

    /// How many entries to show.
    #[arg(short, long, value_enum)]
    pub top: Option<TopN>,

    /// Also print summary statistics for the column.
    #[arg(long)]
    pub stats: bool,
}

/// Value frequency report for one CSV column.
#[derive(Debug, Serialize)]
pub struct NumbersReport {
    /// File that was analyzed.
    pub file: Utf8PathBuf,
    /// Column that was analyzed.
    pub column: String,
    /// Values counted (missing cells excluded).
    pub total_values: usize,
    /// Cells that were empty or not numeric.
    pub missing: usize,
    /// Distinct values counted.
    pub distinct_values: usize,
    /// The requested cut of the ranking.
    pub entries: Ranking<Number>,
    /// Summary statistics, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ColumnSummary>,
}

/// Rank value frequencies in one CSV column.
#[instrument(name = "cmd_numbers", skip_all, fields(file = %args.file, column = %args.column))]
pub fn cmd_numbers(
    args: NumbersArgs,
    global_json: bool,
    config_top: Option<TopN>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let top = args.top.or(config_top).unwrap_or_default();
    debug!(file = %args.file, column = %args.column, %top, "executing numbers command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let values = read_column(&content, &args.column)
        .with_context(|| format!("failed to read column '{}' from {}", args.column, args.file))?;

    let corpus = tokenize::tokenize_numeric_column(&values);
    let missing = values.len() - corpus.len();

    let full = frequency::rank(&corpus, TopN::All).with_context(|| {
        format!(
            "no values to rank in column '{}' of {}",
            args.column, args.file
        )
    })?;
    let distinct_values = full.len();
    let mut entries = full;
    if let Some(limit) = top.limit() {
        entries.truncate(limit);
    }

    let column_stats = if args.stats {
        let present: Vec<f64> = corpus.iter().map(Number::value).collect();
        Some(stats::summarize(&present)?)
    } else {
        None
    };

    let report = NumbersReport {
        file: args.file,
        column: args.column,
        total_values: corpus.len(),
        missing,
        distinct_values,
        entries,
        stats: column_stats,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.file.bold());
    println!(
        "\n  {} '{}': {} values, {} distinct, {} missing",
        "Column".cyan(),
        report.column,
        report.total_values,
        report.distinct_values,
        report.missing,
    );
    println!();
    for entry in &report.entries {
        println!(
            "  {:<20} {:>6}  {:>7.2}%",
            entry.token.to_string(),
            entry.count,
            entry.percentage,
        );
    }

    if let Some(ref s) = report.stats {
        println!(
            "\n  {} mean {:.2}, median {:.2}, std dev {:.2}, min {:.2}, max {:.2}, count {}",
            "Stats:".cyan(),
            s.mean,
            s.median,
            s.std_dev,
            s.min,
            s.max,
            s.count,
        );
    }

    Ok(())
}

/// Pull one named column out of CSV text.
///
/// A cell that is empty or does not parse as a number is a missing
/// entry; the tokenizer drops those.
fn read_column(content: &str, column: &str) -> anyhow::Result<Vec<Option<f64>>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers().context("failed to read CSV headers")?;
    let index = headers
        .iter()
        .position(|h| h == column)
        .with_context(|| format!("no such column; available: {}", headers.iter().collect::<Vec<_>>().join(", ")))?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        let cell = record.get(index).unwrap_or("").trim();
        values.push(cell.parse::<f64>().ok());
    }
    Ok(values)
}
