//! Emails command — email address extraction with optional contact saving.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tally_core::contacts::ContactStore;
use tally_core::emails::{self, EmailMatch};

use super::{contacts_store_path, read_input_file};

/// Arguments for the `emails` subcommand.
#[derive(Args, Debug)]
pub struct EmailsArgs {
    /// File to extract addresses from.
    pub file: Utf8PathBuf,

    /// Save the extracted addresses to the contact store.
    #[arg(long)]
    pub save: bool,

    /// Contact store file (overrides config and the default location).
    #[arg(long, value_name = "FILE")]
    pub contacts: Option<Utf8PathBuf>,
}

/// Extraction report for one file.
#[derive(Debug, Serialize)]
pub struct EmailsReport {
    /// File that was scanned.
    pub file: Utf8PathBuf,
    /// Addresses found, in order of appearance.
    pub matches: Vec<EmailMatch>,
    /// How many addresses were newly saved, when `--save` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<usize>,
}

/// Extract email addresses from a file.
#[instrument(name = "cmd_emails", skip_all, fields(file = %args.file, save = args.save))]
pub fn cmd_emails(
    args: EmailsArgs,
    global_json: bool,
    config_contacts: Option<&camino::Utf8Path>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing emails command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let matches = emails::extract(&content);

    if matches.is_empty() {
        bail!("no email addresses found in {}", args.file);
    }

    let saved = if args.save {
        let path = contacts_store_path(args.contacts.as_deref(), config_contacts)?;
        let store = ContactStore::new(&path);
        let addresses: Vec<String> = matches.iter().map(|m| m.address.clone()).collect();
        let added = store.add(&addresses)?;
        debug!(added, path = %path, "contacts saved");
        Some(added)
    } else {
        None
    };

    let report = EmailsReport {
        file: args.file,
        matches,
        saved,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.file.bold());
    println!(
        "\n  {} {} addresses",
        "Found:".cyan(),
        report.matches.len(),
    );
    println!();
    for m in &report.matches {
        println!("  {:<32} {:<16} {}", m.address, m.user, m.domain.dimmed());
    }

    if let Some(added) = report.saved {
        println!("\n  {} {} new contacts saved", "Saved:".green(), added);
    }

    Ok(())
}
