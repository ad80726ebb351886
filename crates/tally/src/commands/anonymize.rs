//! Anonymize command — personal name replacement.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use tally_core::anonymize::{BuiltinNames, FileNames, NameSet, anonymize_names};

use super::read_input_file;

/// Arguments for the `anonymize` subcommand.
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// File to anonymize.
    pub file: Utf8PathBuf,

    /// Name corpus file, one name per line (overrides config; the
    /// built-in list is used when neither is set).
    #[arg(long, value_name = "FILE")]
    pub names_file: Option<Utf8PathBuf>,
}

/// Anonymization report for one file.
#[derive(Debug, Serialize)]
pub struct AnonymizeReport {
    /// File that was anonymized.
    pub file: Utf8PathBuf,
    /// The anonymized text.
    pub text: String,
}

/// Replace personal names in a file and print the result.
#[instrument(name = "cmd_anonymize", skip_all, fields(file = %args.file))]
pub fn cmd_anonymize(
    args: AnonymizeArgs,
    global_json: bool,
    config_names_file: Option<&camino::Utf8Path>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing anonymize command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    // The name set is chosen here, once; the library takes whichever
    // provider it is handed.
    let file_names = match args.names_file.as_deref().or(config_names_file) {
        Some(path) => Some(FileNames::load(path)?),
        None => None,
    };
    let names: &dyn NameSet = match file_names {
        Some(ref names) => names,
        None => &BuiltinNames,
    };

    let text = anonymize_names(&content, names);
    let report = AnonymizeReport {
        file: args.file,
        text,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.text);
    }

    Ok(())
}
