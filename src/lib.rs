//! # Keyword Sentiment Report
//!
//! Library for keyword-based sentiment analysis of social-media posts,
//! with chart rendering and PDF summary generation.
//!
//! ## Modules
//!
//! - `data` - Dataset loading, keyword filtering and text preprocessing
//! - `sentiment` - Lexicon scoring, aggregation and classification
//! - `report` - Charts and the PDF summary document
//! - `prompt` - Interactive keyword and sample size prompts
//! - `config` - Application configuration
//!
//! ## Example Usage
//!
//! ```no_run
//! use keyword_sentiment::{
//!     AggregateResult, Dataset, KeywordFilter, PatternAnalyzer, SentimentScorer,
//! };
//!
//! let dataset = Dataset::load("Tweets.csv", "text").unwrap();
//! let filter = KeywordFilter::new("delay").unwrap();
//! let sample = filter.sample(&dataset, 100);
//!
//! let analyzer = PatternAnalyzer::new();
//! let items = analyzer.score_batch(sample.texts());
//! let result = AggregateResult::from_items(&items);
//!
//! println!("{}", result);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod prompt;
pub mod report;
pub mod sentiment;

// Re-exports for convenience
pub use config::{load_config, save_config, AppConfig, ConfigError};
pub use data::{Dataset, KeywordFilter, Post, Sample, TextPreprocessor};
pub use error::{Error, Result};
pub use report::{ChartRenderer, ReportArtifacts, ReportWriter, SummaryPage};
pub use sentiment::{
    AggregateResult, PatternAnalyzer, PolarityLabel, ScoredItem, SentimentScorer,
    SubjectivityHistogram, SubjectivityLabel, SubjectivityLexicon,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Dataset file read when no path is given
    pub const DATASET_PATH: &str = "Tweets.csv";

    /// CSV column holding the post text
    pub const TEXT_COLUMN: &str = "text";

    /// Largest sample an operator may request
    pub const MAX_SAMPLE_SIZE: usize = 500;

    /// Number of bins in the polarity histogram
    pub const HISTOGRAM_BINS: usize = 20;

    /// Column width for wrapped summary text
    pub const WRAP_WIDTH: usize = 85;

    /// Polarity chart file name
    pub const POLARITY_CHART: &str = "polarity_histogram.png";

    /// Subjectivity chart file name
    pub const SUBJECTIVITY_CHART: &str = "subjectivity_pie_chart.png";
}
