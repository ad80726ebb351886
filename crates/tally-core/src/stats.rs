//! Summary statistics for a numeric column.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

/// Summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Number of present (non-missing) values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (midpoint of the two central values for even counts).
    pub median: f64,
    /// Sample standard deviation (n − 1). Zero for a single value.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// Summarize a column of present values.
///
/// Missing entries must already be dropped (see
/// [`crate::tokenize::tokenize_numeric_column`]).
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when the column has no values.
#[tracing::instrument(skip_all, fields(rows = values.len()))]
pub fn summarize(values: &[f64]) -> AnalysisResult<ColumnSummary> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let count = values.len();
    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;

    let std_dev = if count > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Ok(ColumnSummary {
        count,
        mean,
        median,
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
    })
}
