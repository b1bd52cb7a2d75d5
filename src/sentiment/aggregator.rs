//! # Sentiment Aggregator
//!
//! Averages per-post scores, classifies the averages and buckets
//! subjectivity into the five label ranges.

use super::labels::{PolarityLabel, SubjectivityLabel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Polarity and subjectivity of one analyzed post
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    polarity: f64,
    subjectivity: f64,
}

impl ScoredItem {
    /// Create a scored item, clamping polarity to [-1, 1] and subjectivity to [0, 1]
    ///
    /// NaN components become 0.0.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        let nan_to_zero = |v: f64| if v.is_nan() { 0.0 } else { v };
        Self {
            polarity: nan_to_zero(polarity).clamp(-1.0, 1.0),
            subjectivity: nan_to_zero(subjectivity).clamp(0.0, 1.0),
        }
    }

    /// Negative to positive, -1 to 1
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    /// Factual to opinionated, 0 to 1
    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }
}

/// Arithmetic means of polarity and subjectivity, `(0.0, 0.0)` when empty
pub fn compute_means(items: &[ScoredItem]) -> (f64, f64) {
    if items.is_empty() {
        return (0.0, 0.0);
    }

    let n = items.len() as f64;
    let polarity: f64 = items.iter().map(|i| i.polarity).sum();
    let subjectivity: f64 = items.iter().map(|i| i.subjectivity).sum();

    (polarity / n, subjectivity / n)
}

/// Label for a mean polarity
pub fn classify_polarity(mean_polarity: f64) -> PolarityLabel {
    PolarityLabel::from_score(mean_polarity)
}

/// Label for a mean subjectivity
pub fn classify_subjectivity(mean_subjectivity: f64) -> SubjectivityLabel {
    SubjectivityLabel::from_score(mean_subjectivity)
}

/// Per-post subjectivity counts over the five label ranges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectivityHistogram {
    counts: [usize; 5],
}

impl SubjectivityHistogram {
    /// Bucket each item's subjectivity individually
    pub fn from_items(items: &[ScoredItem]) -> Self {
        let mut counts = [0usize; 5];
        for item in items {
            counts[SubjectivityLabel::from_score(item.subjectivity).index()] += 1;
        }
        Self { counts }
    }

    /// Counts ordered from "mostly factual" to "mostly opinionated"
    pub fn counts(&self) -> [usize; 5] {
        self.counts
    }

    /// Count for one bucket
    pub fn get(&self, label: SubjectivityLabel) -> usize {
        self.counts[label.index()]
    }

    /// Sum of all buckets
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Buckets paired with their labels
    pub fn iter(&self) -> impl Iterator<Item = (SubjectivityLabel, usize)> + '_ {
        SubjectivityLabel::ALL.iter().copied().zip(self.counts.iter().copied())
    }
}

impl Index<SubjectivityLabel> for SubjectivityHistogram {
    type Output = usize;

    fn index(&self, label: SubjectivityLabel) -> &usize {
        &self.counts[label.index()]
    }
}

/// Bucket counts of per-post subjectivity
pub fn histogram_subjectivity(items: &[ScoredItem]) -> SubjectivityHistogram {
    SubjectivityHistogram::from_items(items)
}

/// Aggregate of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Mean polarity over all items
    pub mean_polarity: f64,
    /// Mean subjectivity over all items
    pub mean_subjectivity: f64,
    /// Classification of the mean polarity
    pub polarity_label: PolarityLabel,
    /// Classification of the mean subjectivity
    pub subjectivity_label: SubjectivityLabel,
    /// Per-item subjectivity buckets
    pub histogram: SubjectivityHistogram,
    /// Number of items aggregated
    pub item_count: usize,
}

impl AggregateResult {
    /// Aggregate a finite sequence of scored items
    pub fn from_items(items: &[ScoredItem]) -> Self {
        let (mean_polarity, mean_subjectivity) = compute_means(items);

        Self {
            mean_polarity,
            mean_subjectivity,
            polarity_label: classify_polarity(mean_polarity),
            subjectivity_label: classify_subjectivity(mean_subjectivity),
            histogram: histogram_subjectivity(items),
            item_count: items.len(),
        }
    }
}

impl fmt::Display for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Polarity: {:.3} ({})\n\
             Average Subjectivity: {:.3} ({})\n\
             Analyzed: {} posts",
            self.mean_polarity,
            self.polarity_label,
            self.mean_subjectivity,
            self.subjectivity_label,
            self.item_count
        )
    }
}
