//! # Subjectivity Lexicon
//!
//! Word list carrying both a polarity and a subjectivity score per entry,
//! plus the intensifiers and negations that modify them.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Scores attached to one lexicon word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    /// -1 to 1
    pub polarity: f64,
    /// 0 to 1
    pub subjectivity: f64,
}

/// Opinion lexicon for English social-media text
///
/// Contains mostly adjectives, a few verbs common in posts, and emoticons.
#[derive(Debug, Clone)]
pub struct SubjectivityLexicon {
    /// Word to score mapping
    words: HashMap<String, LexiconEntry>,
    /// Negation words
    negations: HashSet<String>,
    /// Intensifier words and their multipliers
    intensifiers: HashMap<String, f64>,
}

/// Row of a lexicon CSV file
#[derive(Debug, Deserialize)]
struct LexiconRecord {
    word: String,
    polarity: f64,
    subjectivity: f64,
    #[serde(default)]
    intensity: Option<f64>,
}

impl Default for SubjectivityLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectivityLexicon {
    /// Create a lexicon with the built-in entries
    pub fn new() -> Self {
        // (word, polarity, subjectivity)
        let positive_words = vec![
            ("good", 0.7, 0.6),
            ("great", 0.8, 0.75),
            ("best", 1.0, 0.3),
            ("better", 0.5, 0.5),
            ("excellent", 1.0, 1.0),
            ("amazing", 0.6, 0.9),
            ("awesome", 1.0, 1.0),
            ("nice", 0.6, 1.0),
            ("wonderful", 1.0, 1.0),
            ("perfect", 1.0, 1.0),
            ("fantastic", 0.4, 0.9),
            ("beautiful", 0.85, 1.0),
            ("lovely", 0.5, 0.75),
            ("impressive", 1.0, 1.0),
            ("happy", 0.8, 1.0),
            ("glad", 0.5, 1.0),
            ("pleasant", 0.733, 0.967),
            ("friendly", 0.375, 0.5),
            ("kind", 0.6, 0.9),
            ("helpful", 0.5, 0.5),
            ("comfortable", 0.4, 0.8),
            ("easy", 0.433, 0.833),
            ("smooth", 0.4, 0.7),
            ("fast", 0.2, 0.6),
            ("quick", 0.333, 0.5),
            ("safe", 0.5, 0.5),
            ("fine", 0.417, 0.5),
            ("cool", 0.35, 0.65),
            ("fun", 0.3, 0.2),
            ("funny", 0.25, 0.75),
            ("interesting", 0.5, 0.5),
            ("positive", 0.227, 0.545),
            ("special", 0.357, 0.571),
            ("super", 0.333, 0.667),
            ("love", 0.5, 0.6),
            ("thanks", 0.2, 0.2),
            ("thank", 0.2, 0.2),
        ];

        let negative_words = vec![
            ("bad", -0.7, 0.667),
            ("worst", -1.0, 1.0),
            ("worse", -0.4, 0.6),
            ("terrible", -1.0, 1.0),
            ("horrible", -1.0, 1.0),
            ("awful", -1.0, 1.0),
            ("pathetic", -1.0, 1.0),
            ("boring", -1.0, 1.0),
            ("poor", -0.4, 0.6),
            ("sad", -0.5, 1.0),
            ("angry", -0.5, 1.0),
            ("rude", -0.3, 0.6),
            ("late", -0.3, 0.6),
            ("slow", -0.3, 0.39),
            ("disappointed", -0.75, 0.75),
            ("disappointing", -0.6, 0.7),
            ("annoying", -0.8, 0.9),
            ("frustrating", -0.4, 0.7),
            ("frustrated", -0.7, 0.4),
            ("ridiculous", -0.333, 1.0),
            ("stupid", -0.8, 1.0),
            ("wrong", -0.5, 0.9),
            ("broken", -0.4, 0.4),
            ("useless", -0.5, 0.2),
            ("dirty", -0.6, 0.8),
            ("uncomfortable", -0.5, 1.0),
            ("unacceptable", -0.5, 0.5),
            ("difficult", -0.5, 1.0),
            ("hard", -0.292, 0.542),
            ("dangerous", -0.6, 0.9),
            ("scary", -0.5, 1.0),
            ("expensive", -0.5, 0.7),
            ("sick", -0.714, 0.857),
            ("crazy", -0.6, 0.9),
            ("negative", -0.3, 0.4),
            ("serious", -0.333, 0.667),
            ("hate", -0.8, 0.9),
        ];

        // Words that carry little opinion but still count as assessments
        let factual_words = vec![
            ("first", 0.25, 0.333),
            ("last", 0.0, 0.067),
            ("new", 0.136, 0.455),
            ("old", 0.1, 0.2),
            ("early", 0.1, 0.3),
            ("long", -0.05, 0.4),
            ("full", 0.35, 0.55),
            ("other", -0.125, 0.375),
        ];

        let emoticons = vec![
            (":)", 0.5, 1.0),
            (":-)", 0.5, 1.0),
            (";)", 0.5, 1.0),
            ("=)", 0.5, 1.0),
            (":d", 1.0, 1.0),
            (":p", 0.5, 1.0),
            ("<3", 0.5, 0.6),
            (":(", -0.75, 1.0),
            (":-(", -0.75, 1.0),
            (";(", -0.75, 1.0),
            ("=(", -0.75, 1.0),
        ];

        let words = positive_words
            .into_iter()
            .chain(negative_words)
            .chain(factual_words)
            .chain(emoticons)
            .map(|(word, polarity, subjectivity)| {
                (word.to_string(), LexiconEntry { polarity, subjectivity })
            })
            .collect();

        let negations = vec![
            "not", "no", "never", "neither", "nor", "nothing", "none", "cannot",
            "cant", "can't", "don't", "dont", "doesn't", "doesnt", "didn't",
            "didnt", "won't", "wont", "wouldn't", "wouldnt", "isn't", "isnt",
            "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "hardly",
            "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.3);
        intensifiers.insert("really".to_string(), 1.3);
        intensifiers.insert("so".to_string(), 1.3);
        intensifiers.insert("too".to_string(), 1.2);
        intensifiers.insert("totally".to_string(), 1.3);
        intensifiers.insert("extremely".to_string(), 1.5);
        intensifiers.insert("incredibly".to_string(), 1.5);
        intensifiers.insert("absolutely".to_string(), 1.4);
        intensifiers.insert("quite".to_string(), 1.1);
        intensifiers.insert("pretty".to_string(), 1.1);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("slightly".to_string(), 0.5);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get the scores for a word
    pub fn get(&self, word: &str) -> Option<LexiconEntry> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get intensifier multiplier
    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add or replace a scored word, clamping scores to their ranges
    pub fn add_word(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.words.insert(
            word.to_lowercase(),
            LexiconEntry {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    /// Add or replace an intensifier
    pub fn add_intensifier(&mut self, word: &str, multiplier: f64) {
        self.intensifiers.insert(word.to_lowercase(), multiplier);
    }

    /// Number of scored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no scored words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Merge entries from a CSV file with header `word,polarity,subjectivity[,intensity]`
    ///
    /// Rows with an intensity other than 1.0 become intensifiers; all other
    /// rows are scored words. Returns the number of rows merged.
    pub fn merge_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut merged = 0;
        for (line, record) in reader.deserialize::<LexiconRecord>().enumerate() {
            let record = record?;
            if record.word.is_empty() {
                return Err(Error::Lexicon(format!("row {}: empty word", line + 1)));
            }
            if !(-1.0..=1.0).contains(&record.polarity)
                || !(0.0..=1.0).contains(&record.subjectivity)
            {
                return Err(Error::Lexicon(format!(
                    "row {}: '{}' scores out of range",
                    line + 1,
                    record.word
                )));
            }

            match record.intensity {
                Some(i) if (i - 1.0).abs() > f64::EPSILON => {
                    self.add_intensifier(&record.word, i)
                }
                _ => self.add_word(&record.word, record.polarity, record.subjectivity),
            }
            merged += 1;
        }

        info!(path = %path.display(), merged, "Merged lexicon entries");
        Ok(merged)
    }
}
