//! Occurrence counting and ranking.
//!
//! [`rank`] is a pure function of the corpus and the requested cut: count
//! every token, attach each token's share of the total, sort by count
//! descending with ties broken by first appearance, truncate. Identical
//! input yields byte-identical output across runs.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use serde::Serialize;

use crate::corpus::TopN;
use crate::error::{AnalysisError, AnalysisResult};

/// Token occurrence counts in first-seen order.
///
/// Built fresh from one corpus and never mutated afterwards; a new
/// analysis builds a new table. The insertion order is what makes the
/// ranking's tie-breaking reproducible.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    entries: Vec<(T, usize)>,
    total: usize,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    /// Count occurrences of each distinct token in the corpus.
    pub fn from_corpus(corpus: &[T]) -> Self {
        let mut index: HashMap<&T, usize> = HashMap::new();
        let mut entries: Vec<(T, usize)> = Vec::new();

        for token in corpus {
            match index.entry(token) {
                Entry::Occupied(slot) => entries[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push((token.clone(), 1));
                }
            }
        }

        Self {
            entries,
            total: corpus.len(),
        }
    }
}

impl<T> FrequencyTable<T> {
    /// Total token count (sum of all entry counts).
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Distinct token count.
    pub const fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// `(token, count)` pairs in first-seen order.
    pub fn entries(&self) -> &[(T, usize)] {
        &self.entries
    }
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<T> {
    /// The token.
    pub token: T,
    /// Occurrence count.
    pub count: usize,
    /// Share of all tokens, `100 * count / total`. Unrounded; rounding
    /// is a display concern.
    pub percentage: f64,
}

/// An ordered ranking, count descending.
pub type Ranking<T> = Vec<RankedEntry<T>>;

/// Rank a corpus by occurrence count.
///
/// Entries are sorted by count descending; equal counts keep the order
/// in which their tokens first appear in the corpus. `top_n` truncates
/// the result without reordering what remains.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when the corpus has no tokens — there
/// is no total to take shares of.
#[tracing::instrument(skip_all, fields(tokens = corpus.len(), top_n = %top_n))]
pub fn rank<T: Eq + Hash + Clone>(corpus: &[T], top_n: TopN) -> AnalysisResult<Ranking<T>> {
    let table = FrequencyTable::from_corpus(corpus);
    if table.total() == 0 {
        return Err(AnalysisError::EmptyInput);
    }
    let total = table.total() as f64;

    let mut entries = table.entries;
    // Stable sort: equal counts keep first-seen order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut ranking: Ranking<T> = entries
        .into_iter()
        .map(|(token, count)| RankedEntry {
            token,
            count,
            percentage: (count as f64 / total) * 100.0,
        })
        .collect();

    if let Some(limit) = top_n.limit() {
        ranking.truncate(limit);
    }

    Ok(ranking)
}
