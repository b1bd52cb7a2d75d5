//! # Data Module
//!
//! Dataset loading, keyword filtering and text preprocessing.

mod filter;
mod loader;
mod preprocessing;

pub use filter::{KeywordFilter, Sample};
pub use loader::{Dataset, Post};
pub use preprocessing::TextPreprocessor;
