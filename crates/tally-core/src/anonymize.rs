//! Personal name anonymization.
//!
//! Replaces capitalized words with a placeholder while leaving trailing
//! punctuation in place. A sentence-initial word is only replaced when
//! the name set knows it (it may just be a capitalized common word);
//! every later capitalized word is treated as a name.
//!
//! The name set is injected rather than probed for at run time: callers
//! pick [`BuiltinNames`] or [`FileNames`] at startup.

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;

use crate::error::{AnalysisError, AnalysisResult};

/// Replacement for an anonymized name.
const PLACEHOLDER: &str = "xxx";

/// Regex splitting a word into its leading capitalized run and the rest.
static NAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-zA-Z]*)(.*)$").expect("valid regex"));

/// First names used by the built-in fallback set.
static FALLBACK_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "John",
        "Michael",
        "David",
        "James",
        "Robert",
        "William",
        "Mary",
        "Jennifer",
        "Linda",
        "Elizabeth",
        "Susan",
        "Patricia",
        "Sarah",
    ]
    .into_iter()
    .collect()
});

/// A set of known personal names.
pub trait NameSet {
    /// Whether `name` is a known personal name. `name` has punctuation
    /// already stripped.
    fn contains(&self, name: &str) -> bool;
}

/// The built-in fallback name list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNames;

impl NameSet for BuiltinNames {
    fn contains(&self, name: &str) -> bool {
        FALLBACK_NAMES.contains(name)
    }
}

/// A name list loaded from a corpus file, one name per line.
#[derive(Debug, Clone)]
pub struct FileNames {
    names: HashSet<String>,
}

impl FileNames {
    /// Load a name list from a file. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NameListUnavailable`] when the file cannot be
    /// read — a missing corpus must surface, not quietly disable
    /// anonymization of sentence-initial names.
    #[tracing::instrument]
    pub fn load<P: AsRef<Utf8Path> + std::fmt::Debug>(path: P) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path.as_std_path()).map_err(|err| {
            AnalysisError::NameListUnavailable {
                path: Utf8PathBuf::from(path),
                source: err,
            }
        })?;
        let names = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { names })
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameSet for FileNames {
    fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Replace personal names in the text with a placeholder.
///
/// Output is whitespace-normalized: words are re-joined with single
/// spaces. A word keeps its trailing punctuation when replaced
/// (`"John,"` becomes `"xxx,"`); a word that does not begin with its
/// capital letter (`"(John"`) is left alone.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn anonymize_names(text: &str, names: &dyn NameSet) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut sentence_start = true;

    for word in text.split_whitespace() {
        let clean: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        let capitalized = clean.chars().next().is_some_and(char::is_uppercase);

        let replace = capitalized && (!sentence_start || names.contains(&clean));
        if replace && let Some(caps) = NAME_TOKEN.captures(word) {
            output.push(format!("{PLACEHOLDER}{}", &caps[2]));
        } else {
            output.push(word.to_string());
        }

        sentence_start = word.ends_with(['.', '!', '?']);
    }

    output.join(" ")
}
