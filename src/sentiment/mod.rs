//! # Sentiment Analysis Module
//!
//! Polarity and subjectivity scoring, aggregation and classification.

mod aggregator;
mod analyzer;
mod labels;
mod lexicon;

pub use aggregator::{
    classify_polarity, classify_subjectivity, compute_means, histogram_subjectivity,
    AggregateResult, ScoredItem, SubjectivityHistogram,
};
pub use analyzer::{Analysis, Assessment, PatternAnalyzer, SentimentScorer};
pub use labels::{PolarityLabel, SubjectivityLabel};
pub use lexicon::{LexiconEntry, SubjectivityLexicon};
