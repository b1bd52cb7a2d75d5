//! # Sentiment Analyzer
//!
//! Lexicon-based polarity and subjectivity scoring.

use super::aggregator::ScoredItem;
use super::lexicon::SubjectivityLexicon;
use crate::data::TextPreprocessor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Polarity factor applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity boost from a trailing exclamation mark
const EXCLAMATION_BOOST: f64 = 1.25;

/// Tokens that do not break a pending negation ("not a good flight")
const FILLERS: [&str; 3] = ["a", "an", "the"];

/// Maps text to a polarity and subjectivity pair
pub trait SentimentScorer {
    /// Score one text
    fn score(&self, text: &str) -> ScoredItem;

    /// Score several texts, preserving order
    fn score_batch(&self, texts: Vec<&str>) -> Vec<ScoredItem> {
        texts.into_iter().map(|t| self.score(t)).collect()
    }
}

/// One lexicon match inside a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Words forming the assessment, modifiers included ("not very good")
    pub words: Vec<String>,
    /// Polarity after modifiers
    pub polarity: f64,
    /// Subjectivity after modifiers
    pub subjectivity: f64,
}

/// Detailed scoring of a single text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Original text
    pub text: String,
    /// Averaged scores
    pub item: ScoredItem,
    /// Lexicon matches in order of appearance
    pub assessments: Vec<Assessment>,
}

/// Pattern-style analyzer averaging adjective scores
///
/// Each known word becomes an assessment. A preceding intensifier scales
/// both scores, a preceding negation multiplies polarity by -0.5 and an
/// exclamation mark boosts the polarity of the assessment before it.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    preprocessor: TextPreprocessor,
    lexicon: SubjectivityLexicon,
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternAnalyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            preprocessor: TextPreprocessor::new(),
            lexicon: SubjectivityLexicon::new(),
        }
    }

    /// Use a custom lexicon
    pub fn with_lexicon(mut self, lexicon: SubjectivityLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Score a text and keep the individual assessments
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.preprocessor.tokenize(text);

        let mut assessments: Vec<Assessment> = Vec::new();
        let mut modifier: Option<(String, f64)> = None;
        let mut negation: Option<String> = None;

        for token in tokens {
            if let Some(entry) = self.lexicon.get(&token) {
                let mut words = Vec::new();
                let mut polarity = entry.polarity;
                let mut subjectivity = entry.subjectivity;

                if let Some((word, intensity)) = modifier.take() {
                    polarity = (polarity * intensity).clamp(-1.0, 1.0);
                    subjectivity = (subjectivity * intensity).clamp(0.0, 1.0);
                    words.push(word);
                }
                if let Some(word) = negation.take() {
                    polarity *= NEGATION_FACTOR;
                    words.insert(0, word);
                }
                words.push(token);

                assessments.push(Assessment {
                    words,
                    polarity,
                    subjectivity,
                });
            } else if let Some(intensity) = self.lexicon.get_intensifier(&token) {
                // Negation survives an intensifier ("not very good")
                modifier = Some((token, intensity));
            } else if self.lexicon.is_negation(&token) {
                negation = Some(token);
                modifier = None;
            } else if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = (last.polarity * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
                    last.words.push(token);
                }
                modifier = None;
                negation = None;
            } else if !FILLERS.contains(&token.as_str()) {
                modifier = None;
                negation = None;
            }
        }

        let item = if assessments.is_empty() {
            ScoredItem::new(0.0, 0.0)
        } else {
            let n = assessments.len() as f64;
            ScoredItem::new(
                assessments.iter().map(|a| a.polarity).sum::<f64>() / n,
                assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n,
            )
        };

        debug!(
            polarity = item.polarity(),
            subjectivity = item.subjectivity(),
            matches = assessments.len(),
            "Scored text"
        );

        Analysis {
            text: text.to_string(),
            item,
            assessments,
        }
    }
}

impl SentimentScorer for PatternAnalyzer {
    fn score(&self, text: &str) -> ScoredItem {
        self.analyze(text).item
    }
}
