//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod anonymize;
pub mod contacts;
pub mod emails;
pub mod info;
pub mod numbers;
pub mod password;
pub mod words;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every
/// file-consuming command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Resolve the contact store path: flag, then config, then the XDG data
/// directory default.
pub fn contacts_store_path(
    flag: Option<&Utf8Path>,
    config: Option<&Utf8Path>,
) -> anyhow::Result<camino::Utf8PathBuf> {
    if let Some(path) = flag.or(config) {
        return Ok(path.to_path_buf());
    }
    tally_core::config::user_data_dir()
        .map(|dir| dir.join("contacts.json"))
        .context("cannot determine a data directory for the contact store; set contacts_path")
}
