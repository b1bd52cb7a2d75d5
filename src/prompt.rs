//! Interactive prompts
//!
//! Re-asks until the operator gives a usable keyword and sample size.

use crate::data::{Dataset, KeywordFilter};
use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

/// Line-based prompter over any input and output stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a keyword until one matches at least one post in `dataset`
    pub fn ask_keyword(&mut self, dataset: &Dataset) -> Result<KeywordFilter> {
        loop {
            let answer = self.ask("Enter a word to be analyzed in tweets: ")?;

            let filter = match KeywordFilter::new(&answer) {
                Ok(filter) => filter,
                Err(Error::BlankKeyword) => {
                    writeln!(self.output, "Keyword can't be blank.")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if filter.count_matches(dataset) == 0 {
                writeln!(
                    self.output,
                    "No tweets are found containing the word '{}'. Try a different word.",
                    filter.keyword()
                )?;
                continue;
            }

            debug!(keyword = filter.keyword(), "Keyword accepted");
            return Ok(filter);
        }
    }

    /// Ask for a sample size in 1..=max
    pub fn ask_sample_size(&mut self, max: usize) -> Result<usize> {
        let question = format!("Enter the number of tweets to analyze: (MAX {}) ", max);
        loop {
            let answer = self.ask(&question)?;

            // Integers too large for i64 are still integers, just out of range
            match answer.parse::<i64>() {
                Ok(n) if n >= 1 && n as u64 <= max as u64 => return Ok(n as usize),
                Ok(_) => writeln!(self.output, "Please enter a number between 1 - {}.", max)?,
                Err(e)
                    if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) =>
                {
                    writeln!(self.output, "Please enter a number between 1 - {}.", max)?
                }
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }
}

/// Check a sample size given on the command line
pub fn validate_sample_size(value: usize, max: usize) -> Result<usize> {
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidSampleSize { value, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dataset() -> Dataset {
        Dataset::from_texts(vec!["Flight delayed again", "Great crew"])
    }

    #[test]
    fn test_keyword_reprompts() {
        let input = Cursor::new("\n  \nsnow\nDelay\n");
        let mut prompter = Prompter::new(input, Vec::new());

        let filter = prompter.ask_keyword(&dataset()).unwrap();
        assert_eq!(filter.keyword(), "Delay");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Keyword can't be blank.").count(), 2);
        assert!(output.contains(
            "No tweets are found containing the word 'snow'. Try a different word."
        ));
        assert_eq!(output.matches("Enter a word to be analyzed in tweets: ").count(), 4);
    }

    #[test]
    fn test_sample_size_reprompts() {
        let input = Cursor::new("abc\n0\n501\n-3\n42\n");
        let mut prompter = Prompter::new(input, Vec::new());

        assert_eq!(prompter.ask_sample_size(500).unwrap(), 42);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Please enter a valid number.").count(), 1);
        assert_eq!(output.matches("Please enter a number between 1 - 500.").count(), 3);
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        let input = Cursor::new("99999999999999999999\n-99999999999999999999\n7\n");
        let mut prompter = Prompter::new(input, Vec::new());

        assert_eq!(prompter.ask_sample_size(500).unwrap(), 7);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Please enter a number between 1 - 500.").count(), 2);
        assert!(!output.contains("Please enter a valid number."));
    }

    #[test]
    fn test_closed_input() {
        let mut prompter = Prompter::new(Cursor::new("abc\n"), Vec::new());
        assert!(matches!(prompter.ask_sample_size(500), Err(Error::InputClosed)));
    }

    #[test]
    fn test_validate_sample_size() {
        assert_eq!(validate_sample_size(1, 500).unwrap(), 1);
        assert_eq!(validate_sample_size(500, 500).unwrap(), 500);
        assert!(matches!(
            validate_sample_size(0, 500),
            Err(Error::InvalidSampleSize { value: 0, max: 500 })
        ));
    }
}
