//! Persistent contact list.
//!
//! The store is a flat JSON array of email strings, read and written
//! wholesale — no incremental updates, no versioning. Every operation
//! that mutates the list rewrites the whole file.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{StoreError, StoreResult};

/// A contact list persisted as a JSON array of email strings.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: Utf8PathBuf,
}

impl ContactStore {
    /// Create a store backed by the given file. The file need not exist
    /// yet; a missing file reads as an empty list.
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The store's file path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read the whole list.
    #[tracing::instrument(skip_all, fields(path = %self.path))]
    pub fn load(&self) -> StoreResult<Vec<String>> {
        let raw = match std::fs::read_to_string(self.path.as_std_path()) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|err| StoreError::Malformed {
            path: self.path.clone(),
            source: err,
        })
    }

    /// Replace the whole list.
    #[tracing::instrument(skip_all, fields(path = %self.path, contacts = contacts.len()))]
    pub fn save(&self, contacts: &[String]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent.as_std_path()).map_err(|err| StoreError::Io {
                path: self.path.clone(),
                source: err,
            })?;
        }

        let raw = serde_json::to_string_pretty(contacts).map_err(|err| StoreError::Malformed {
            path: self.path.clone(),
            source: err,
        })?;
        std::fs::write(self.path.as_std_path(), raw).map_err(|err| StoreError::Io {
            path: self.path.clone(),
            source: err,
        })
    }

    /// Append addresses not already present. Returns how many were new.
    pub fn add(&self, addresses: &[String]) -> StoreResult<usize> {
        let mut contacts = self.load()?;
        let before = contacts.len();
        for address in addresses {
            if !contacts.contains(address) {
                contacts.push(address.clone());
            }
        }
        let added = contacts.len() - before;
        if added > 0 {
            self.save(&contacts)?;
        }
        Ok(added)
    }
}
