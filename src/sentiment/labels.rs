//! # Sentiment Labels
//!
//! Fixed range tables mapping polarity and subjectivity scores to labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarityLabel {
    /// score < -0.5
    VeryNegative,
    /// -0.5 <= score < -0.25
    SlightlyNegative,
    /// -0.25 <= score < 0.25
    Neutral,
    /// 0.25 <= score < 0.5
    SlightlyPositive,
    /// score >= 0.5
    VeryPositive,
}

impl PolarityLabel {
    /// Classify a polarity score
    ///
    /// 0.5 itself is very positive so every input gets a label.
    pub fn from_score(score: f64) -> Self {
        if score < -0.5 {
            PolarityLabel::VeryNegative
        } else if score < -0.25 {
            PolarityLabel::SlightlyNegative
        } else if score < 0.25 {
            PolarityLabel::Neutral
        } else if score < 0.5 {
            PolarityLabel::SlightlyPositive
        } else {
            PolarityLabel::VeryPositive
        }
    }

    /// Short label
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarityLabel::VeryNegative => "very negative",
            PolarityLabel::SlightlyNegative => "slightly negative",
            PolarityLabel::Neutral => "neutral",
            PolarityLabel::SlightlyPositive => "slightly positive",
            PolarityLabel::VeryPositive => "very positive",
        }
    }

    /// Sentence used in the summary report
    pub fn interpretation(&self) -> String {
        format!("This is a {} word within the Twitter space.", self.as_str())
    }
}

impl fmt::Display for PolarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subjectivity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectivityLabel {
    /// score < 0.25
    MostlyFactual,
    /// 0.25 <= score < 0.40
    SlightlyFactual,
    /// 0.40 <= score < 0.60
    Balanced,
    /// 0.60 <= score < 0.76
    SlightlyOpinionated,
    /// score >= 0.76
    MostlyOpinionated,
}

impl SubjectivityLabel {
    /// All labels from most factual to most opinionated
    pub const ALL: [SubjectivityLabel; 5] = [
        SubjectivityLabel::MostlyFactual,
        SubjectivityLabel::SlightlyFactual,
        SubjectivityLabel::Balanced,
        SubjectivityLabel::SlightlyOpinionated,
        SubjectivityLabel::MostlyOpinionated,
    ];

    /// Classify a subjectivity score
    pub fn from_score(score: f64) -> Self {
        if score < 0.25 {
            SubjectivityLabel::MostlyFactual
        } else if score < 0.40 {
            SubjectivityLabel::SlightlyFactual
        } else if score < 0.60 {
            SubjectivityLabel::Balanced
        } else if score < 0.76 {
            SubjectivityLabel::SlightlyOpinionated
        } else {
            SubjectivityLabel::MostlyOpinionated
        }
    }

    /// Position in [`SubjectivityLabel::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Short label
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectivityLabel::MostlyFactual => "mostly factual",
            SubjectivityLabel::SlightlyFactual => "slightly factual",
            SubjectivityLabel::Balanced => "balanced (facts + opinions)",
            SubjectivityLabel::SlightlyOpinionated => "slightly opinionated",
            SubjectivityLabel::MostlyOpinionated => "mostly opinionated",
        }
    }

    /// Capitalized label for chart legends
    pub fn title(&self) -> &'static str {
        match self {
            SubjectivityLabel::MostlyFactual => "Mostly Factual",
            SubjectivityLabel::SlightlyFactual => "Slightly Factual",
            SubjectivityLabel::Balanced => "Balanced (Facts + Opinions)",
            SubjectivityLabel::SlightlyOpinionated => "Slightly Opinionated",
            SubjectivityLabel::MostlyOpinionated => "Mostly Opinionated",
        }
    }

    /// Sentence used in the summary report
    pub fn interpretation(&self) -> &'static str {
        match self {
            SubjectivityLabel::MostlyFactual => {
                "This word is mostly discussed within a factual manner in the Twitter space."
            }
            SubjectivityLabel::SlightlyFactual => {
                "This word is slightly discussed within a factual manner in the Twitter space."
            }
            SubjectivityLabel::Balanced => {
                "This word is discussed in both a factual manner and in an opinionated manner in the Twitter space."
            }
            SubjectivityLabel::SlightlyOpinionated => {
                "This word is slightly discussed in an opinionated manner in the Twitter space."
            }
            SubjectivityLabel::MostlyOpinionated => {
                "This word is mostly discussed in an opinionated manner in the Twitter space."
            }
        }
    }
}

impl fmt::Display for SubjectivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_labels() {
        assert_eq!(PolarityLabel::from_score(-0.6).as_str(), "very negative");
        assert_eq!(PolarityLabel::from_score(-0.5).as_str(), "slightly negative");
        assert_eq!(PolarityLabel::from_score(-0.25).as_str(), "neutral");
        assert_eq!(PolarityLabel::from_score(0.0).as_str(), "neutral");
        assert_eq!(PolarityLabel::from_score(0.25).as_str(), "slightly positive");
        assert_eq!(PolarityLabel::from_score(0.3).as_str(), "slightly positive");
        assert_eq!(PolarityLabel::from_score(0.8).as_str(), "very positive");
    }

    #[test]
    fn test_polarity_half_is_very_positive() {
        assert_eq!(PolarityLabel::from_score(0.5), PolarityLabel::VeryPositive);
        assert_eq!(PolarityLabel::from_score(0.4999), PolarityLabel::SlightlyPositive);
    }

    #[test]
    fn test_subjectivity_labels() {
        assert_eq!(SubjectivityLabel::from_score(0.10).as_str(), "mostly factual");
        assert_eq!(SubjectivityLabel::from_score(0.25).as_str(), "slightly factual");
        assert_eq!(SubjectivityLabel::from_score(0.50).as_str(), "balanced (facts + opinions)");
        assert_eq!(SubjectivityLabel::from_score(0.60).as_str(), "slightly opinionated");
        assert_eq!(SubjectivityLabel::from_score(0.76).as_str(), "mostly opinionated");
        assert_eq!(SubjectivityLabel::from_score(1.00).as_str(), "mostly opinionated");
    }

    #[test]
    fn test_index_matches_all() {
        for (i, label) in SubjectivityLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_interpretation() {
        assert_eq!(
            PolarityLabel::Neutral.interpretation(),
            "This is a neutral word within the Twitter space."
        );
        assert!(SubjectivityLabel::Balanced.interpretation().contains("both a factual manner"));
    }
}
