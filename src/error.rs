//! Error types for the keyword sentiment library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset file could not be opened or read
    #[error("Failed to read dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Text column missing from the dataset header
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Keyword is empty after trimming
    #[error("Keyword can't be blank")]
    BlankKeyword,

    /// Keyword could not be compiled into a matcher
    #[error("Invalid keyword: {0}")]
    InvalidKeyword(String),

    /// No post contains the keyword
    #[error("No tweets are found containing the word '{0}'")]
    NoMatches(String),

    /// Requested sample size outside the accepted range
    #[error("Sample size {value} is outside 1 - {max}")]
    InvalidSampleSize { value: usize, max: usize },

    /// Input stream closed while waiting for an answer
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// Lexicon file could not be parsed
    #[error("Invalid lexicon entry: {0}")]
    Lexicon(String),

    /// Chart drawing failed
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// PDF assembly failed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
