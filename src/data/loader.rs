//! Dataset loading
//!
//! Reads the post dataset from a CSV file with a header row.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One dataset row
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Zero-based row index in the dataset
    pub index: usize,
    /// Post text, `None` when the cell is empty
    pub text: Option<String>,
}

impl Post {
    /// Create a post with text
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: Some(text.into()),
        }
    }

    /// Create a post whose text cell is empty
    pub fn missing(index: usize) -> Self {
        Self { index, text: None }
    }
}

/// Post dataset loaded from CSV
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    posts: Vec<Post>,
}

impl Dataset {
    /// Build a dataset from in-memory texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let posts = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let text = text.into();
                if text.trim().is_empty() {
                    Post::missing(index)
                } else {
                    Post::new(index, text)
                }
            })
            .collect();

        Self {
            source: PathBuf::new(),
            posts,
        }
    }

    /// Load posts from a CSV file, reading `text_column` from each row
    pub fn load<P: AsRef<Path>>(path: P, text_column: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let column = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == text_column)
            .ok_or_else(|| Error::MissingColumn {
                column: text_column.to_string(),
                path: path.to_path_buf(),
            })?;

        let mut posts = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            match record.get(column).filter(|t| !t.trim().is_empty()) {
                Some(text) => posts.push(Post::new(index, text)),
                None => {
                    debug!(row = index, "Row has no text");
                    posts.push(Post::missing(index));
                }
            }
        }

        info!(path = %path.display(), rows = posts.len(), "Loaded dataset");

        Ok(Self {
            source: path.to_path_buf(),
            posts,
        })
    }

    /// Path the dataset was read from (empty for in-memory datasets)
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// All rows in file order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Tweets.csv");
        std::fs::write(
            &path,
            "tweet_id,airline,text\n\
             1,United,\"Great crew, thanks!\"\n\
             2,Delta,\n\
             3,United,Flight delayed again\n",
        )
        .unwrap();

        let dataset = Dataset::load(&path, "text").unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.posts()[0].text.as_deref(), Some("Great crew, thanks!"));
        assert_eq!(dataset.posts()[1], Post::missing(1));
        assert_eq!(dataset.posts()[2].index, 2);
        assert_eq!(dataset.source(), path.as_path());
    }

    #[test]
    fn test_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, "id,body\n1,hello\n").unwrap();

        let err = Dataset::load(&path, "text").unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "text"));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load("/nonexistent/Tweets.csv", "text").unwrap_err();
        assert!(matches!(err, Error::DatasetIo { .. }));
    }

    #[test]
    fn test_from_texts() {
        let dataset = Dataset::from_texts(vec!["one", " ", "three"]);
        assert_eq!(dataset.len(), 3);
        assert!(dataset.posts()[1].text.is_none());
    }
}
