//! Tokenizers for the two input modes.
//!
//! Text mode lowercases the input, extracts maximal runs of alphabetic
//! characters, and drops stopwords. Numeric mode drops missing entries
//! and keeps the remaining column values at their exact precision.
//! Both preserve input order; the ranker's tie-breaking depends on it.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::corpus::Number;

/// Regex for maximal alphabetic runs. Digits and punctuation are
/// separators, never part of a token.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Alphabetic}+").expect("valid regex"));

/// Turn raw text into a corpus of lowercase words.
///
/// Returns the non-stopword words in order of appearance. An empty or
/// all-stopword input yields an empty corpus; callers must treat that as
/// an error state when ranking (see [`crate::frequency::rank`]).
#[tracing::instrument(skip_all, fields(text_len = text.len(), stopwords = stopwords.len()))]
pub fn tokenize_text(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|w| !stopwords.contains(w))
        .collect()
}

/// Turn a numeric column into a corpus of [`Number`] tokens.
///
/// `None` entries are missing data and are dropped. NaN is how a missing
/// cell survives parsing, so it is dropped too. Everything else keeps its
/// exact stored value; two entries are the same token only when they are
/// value-equal.
#[tracing::instrument(skip_all, fields(rows = values.len()))]
pub fn tokenize_numeric_column(values: &[Option<f64>]) -> Vec<Number> {
    values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| !v.is_nan())
        .map(Number::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopset(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn extracts_lowercased_words_in_order() {
        let corpus = tokenize_text("The cat sat on the mat", &stopset(&["the", "on"]));
        assert_eq!(corpus, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn digits_and_punctuation_separate_tokens() {
        let corpus = tokenize_text("cat42dog, bird-house!", &HashSet::new());
        assert_eq!(corpus, vec!["cat", "dog", "bird", "house"]);
    }

    #[test]
    fn accented_words_stay_whole() {
        let corpus = tokenize_text("Le café était fermé", &stopset(&["le"]));
        assert_eq!(corpus, vec!["café", "était", "fermé"]);
    }

    #[test]
    fn empty_text_yields_empty_corpus() {
        assert!(tokenize_text("", &HashSet::new()).is_empty());
        assert!(tokenize_text("123 456 !!!", &HashSet::new()).is_empty());
    }

    #[test]
    fn all_stopwords_yields_empty_corpus() {
        let corpus = tokenize_text("the the the", &stopset(&["the"]));
        assert!(corpus.is_empty());
    }

    #[test]
    fn numeric_mode_drops_missing() {
        let corpus =
            tokenize_numeric_column(&[Some(3.0), Some(3.0), Some(5.0), None, Some(5.0), Some(5.0)]);
        let values: Vec<f64> = corpus.iter().map(Number::value).collect();
        assert_eq!(values, vec![3.0, 3.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn numeric_mode_drops_nan() {
        let corpus = tokenize_numeric_column(&[Some(f64::NAN), Some(1.5)]);
        assert_eq!(corpus, vec![Number::new(1.5)]);
    }

    #[test]
    fn all_missing_column_yields_empty_corpus() {
        assert!(tokenize_numeric_column(&[None, None]).is_empty());
        assert!(tokenize_numeric_column(&[]).is_empty());
    }

    #[test]
    fn numeric_mode_keeps_exact_precision() {
        let corpus = tokenize_numeric_column(&[Some(0.1 + 0.2), Some(0.3)]);
        // 0.1 + 0.2 != 0.3 in f64; these must stay distinct tokens.
        assert_ne!(corpus[0], corpus[1]);
    }
}
