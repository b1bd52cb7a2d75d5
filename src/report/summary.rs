//! Summary page layout
//!
//! Positions the text of the first report page in page-relative
//! coordinates so drawing stays a straight copy of the layout.

use crate::sentiment::AggregateResult;

/// Vertical start of the first line, as a fraction of page height from the bottom
const TOP: f64 = 0.95;
/// Gap after the title and after the count line
const HEADING_GAP: f64 = 0.06;
/// Gap after every other line
const LINE_GAP: f64 = 0.04;
/// Left margin for section text, as a fraction of page width
const LEFT_MARGIN: f64 = 0.05;

/// Visual role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// 16pt bold
    Title,
    /// 12pt bold
    Heading,
    /// 12pt regular
    Body,
}

impl LineStyle {
    /// Font size in points
    pub fn font_size(&self) -> f64 {
        match self {
            LineStyle::Title => 16.0,
            LineStyle::Heading | LineStyle::Body => 12.0,
        }
    }

    /// Whether the bold face is used
    pub fn is_bold(&self) -> bool {
        !matches!(self, LineStyle::Body)
    }
}

/// Horizontal anchoring of a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Centered on the given x fraction
    Center(f64),
    /// Left edge at the given x fraction
    Left(f64),
}

/// One positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub text: String,
    pub style: LineStyle,
    pub anchor: Anchor,
    /// Top of the line, fraction of page height from the bottom
    pub y: f64,
}

/// Laid-out text of the summary page
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPage {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

impl SummaryPage {
    /// Lay out the summary for `keyword`, wrapping values at `wrap_width` columns
    pub fn build(keyword: &str, result: &AggregateResult, wrap_width: usize) -> Self {
        let title = format!(
            "TWITTER SENTIMENT SUMMARY FOR THE PHRASE '{}'",
            keyword.to_uppercase()
        );

        let mut lines = Vec::new();
        let mut y = TOP;

        lines.push(SummaryLine {
            text: title.clone(),
            style: LineStyle::Title,
            anchor: Anchor::Center(0.5),
            y,
        });
        y -= HEADING_GAP;

        lines.push(SummaryLine {
            text: format!("Number of Tweets Analyzed: {}", result.item_count),
            style: LineStyle::Heading,
            anchor: Anchor::Center(0.5),
            y,
        });
        y -= HEADING_GAP;

        let sections = [
            ("Average Polarity", format!("{:.3}", result.mean_polarity)),
            ("Interpretation of Polarity", result.polarity_label.interpretation()),
            ("Average Subjectivity", format!("{:.3}", result.mean_subjectivity)),
            (
                "Interpretation of Subjectivity",
                result.subjectivity_label.interpretation().to_string(),
            ),
        ];

        for (header, value) in sections {
            lines.push(SummaryLine {
                text: format!("{}:", header),
                style: LineStyle::Heading,
                anchor: Anchor::Left(LEFT_MARGIN),
                y,
            });
            y -= LINE_GAP;

            for wrapped in wrap_text(&value, wrap_width) {
                lines.push(SummaryLine {
                    text: wrapped,
                    style: LineStyle::Body,
                    anchor: Anchor::Left(LEFT_MARGIN),
                    y,
                });
                y -= LINE_GAP;
            }
            y -= LINE_GAP;
        }

        Self { title, lines }
    }

    /// Plain-text rendering, one line per entry
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();

        for chunk in chars.chunks(width) {
            let piece: String = chunk.iter().collect();
            let piece_len = chunk.len();

            if current_len == 0 {
                current = piece;
                current_len = piece_len;
            } else if current_len + 1 + piece_len <= width {
                current.push(' ');
                current.push_str(&piece);
                current_len += 1 + piece_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
                current_len = piece_len;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
