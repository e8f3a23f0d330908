//! Labeled numeric series driving one chart.

use serde::{Deserialize, Serialize};

/// An ordered sequence of (label, value) pairs.
///
/// Labels and values are supplied by the reporting layer and are expected to
/// be the same length, but that invariant is external. A mismatch is
/// tolerated: a missing value reads as `0.0` and a missing label as the
/// empty string, so a short array degrades to incomplete tooltip data rather
/// than a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    values: Vec<f64>,
}

impl Series {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    /// True when there is nothing to plot. The backing value array is
    /// authoritative; labels alone do not make a chart.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Label at `index`, or `""` when the label array is short.
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    /// Value at `index`, or `0.0` when the value array is short.
    pub fn value_or_zero(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    /// Iterate (label, value) pairs over the value range.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        (0..self.values.len()).map(|i| (self.label(i), self.values[i]))
    }

    /// Largest value in the series, or `0.0` when empty.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0_f64, f64::max)
    }
}
