//! Keyword filtering
//!
//! Selects the posts mentioning a keyword, case-insensitively.

use super::loader::{Dataset, Post};
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use tracing::info;

/// Case-insensitive literal keyword matcher
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keyword: String,
    pattern: Regex,
}

impl KeywordFilter {
    /// Create a filter for `keyword`; surrounding whitespace is ignored
    pub fn new(keyword: &str) -> Result<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(Error::BlankKeyword);
        }

        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::InvalidKeyword(e.to_string()))?;

        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    /// The trimmed keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether `text` contains the keyword
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn matching<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Post> + 'a {
        dataset
            .posts()
            .iter()
            .filter(move |post| post.text.as_deref().is_some_and(|t| self.matches(t)))
    }

    /// Number of posts containing the keyword
    pub fn count_matches(&self, dataset: &Dataset) -> usize {
        self.matching(dataset).count()
    }

    /// First `limit` matching posts in dataset order
    pub fn sample(&self, dataset: &Dataset, limit: usize) -> Sample {
        let posts: Vec<Post> = self.matching(dataset).take(limit).cloned().collect();
        info!(keyword = %self.keyword, selected = posts.len(), limit, "Sampled posts");

        Sample {
            keyword: self.keyword.clone(),
            posts,
        }
    }
}

/// Posts selected for one analysis run
#[derive(Debug, Clone)]
pub struct Sample {
    /// Keyword the posts were selected by
    pub keyword: String,
    /// Selected posts, all with text
    pub posts: Vec<Post>,
}

impl Sample {
    /// Texts of the selected posts
    pub fn texts(&self) -> Vec<&str> {
        self.posts.iter().filter_map(|p| p.text.as_deref()).collect()
    }

    /// Number of selected posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
