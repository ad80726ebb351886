//! Contacts command — list or clear the saved contact list.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use tally_core::contacts::ContactStore;

use super::contacts_store_path;

/// Arguments for the `contacts` subcommand.
#[derive(Args, Debug)]
pub struct ContactsArgs {
    /// Contact store file (overrides config and the default location).
    #[arg(long, value_name = "FILE")]
    pub contacts: Option<Utf8PathBuf>,

    /// Empty the contact list.
    #[arg(long)]
    pub clear: bool,
}

/// List or clear saved contacts.
#[instrument(name = "cmd_contacts", skip_all, fields(clear = args.clear))]
pub fn cmd_contacts(
    args: ContactsArgs,
    global_json: bool,
    config_contacts: Option<&camino::Utf8Path>,
) -> anyhow::Result<()> {
    let path = contacts_store_path(args.contacts.as_deref(), config_contacts)?;
    let store = ContactStore::new(&path);
    debug!(path = %path, "executing contacts command");

    if args.clear {
        store.save(&[])?;
        if global_json {
            println!("{}", serde_json::json!({ "cleared": true, "path": path }));
        } else {
            println!("{} {}", "Cleared".green(), path);
        }
        return Ok(());
    }

    let contacts = store.load()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("no contacts saved ({})", path.dimmed());
        return Ok(());
    }

    println!("{} ({} contacts)", path.bold(), contacts.len());
    println!();
    for contact in &contacts {
        println!("  {contact}");
    }

    Ok(())
}
