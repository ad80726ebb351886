//! Stopword sets keyed by language.
//!
//! Sets come from the `stop-words` crate. Requesting a language that has
//! no list is a hard error, not a fall-back to English or to an empty
//! set — filtering with the wrong set would silently skew every count
//! downstream.

use std::collections::HashSet;

use stop_words::LANGUAGE;

use crate::error::{AnalysisError, AnalysisResult};

/// Languages with a stopword list, lowercase, alphabetical.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "arabic",
    "danish",
    "dutch",
    "english",
    "finnish",
    "french",
    "german",
    "hungarian",
    "italian",
    "norwegian",
    "polish",
    "portuguese",
    "russian",
    "spanish",
    "swedish",
    "turkish",
];

/// Look up the stopword set for a language.
///
/// Accepts the full lowercase name (`"english"`). Words in the returned
/// set are lowercase, matching the tokenizer's case normalization.
///
/// # Errors
///
/// [`AnalysisError::UnsupportedLanguage`] when no list exists for the
/// requested name.
#[tracing::instrument]
pub fn for_language(language: &str) -> AnalysisResult<HashSet<String>> {
    let lang = match language.to_lowercase().as_str() {
        "arabic" => LANGUAGE::Arabic,
        "danish" => LANGUAGE::Danish,
        "dutch" => LANGUAGE::Dutch,
        "english" => LANGUAGE::English,
        "finnish" => LANGUAGE::Finnish,
        "french" => LANGUAGE::French,
        "german" => LANGUAGE::German,
        "hungarian" => LANGUAGE::Hungarian,
        "italian" => LANGUAGE::Italian,
        "norwegian" => LANGUAGE::Norwegian,
        "polish" => LANGUAGE::Polish,
        "portuguese" => LANGUAGE::Portuguese,
        "russian" => LANGUAGE::Russian,
        "spanish" => LANGUAGE::Spanish,
        "swedish" => LANGUAGE::Swedish,
        "turkish" => LANGUAGE::Turkish,
        _ => {
            return Err(AnalysisError::UnsupportedLanguage {
                language: language.to_string(),
                available: SUPPORTED_LANGUAGES.join(", "),
            });
        }
    };

    Ok(stop_words::get(lang).into_iter().collect())
}
