//! # Text Preprocessing
//!
//! Cleaning and tokenization of social-media posts before scoring.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Text preprocessor for social-media posts
#[derive(Debug, Clone)]
pub struct TextPreprocessor {
    /// Regex for URL removal
    url_regex: Regex,
    /// Regex for mention removal
    mention_regex: Regex,
    /// Regex for multiple whitespace
    whitespace_regex: Regex,
    /// Regex matching word and emoticon tokens
    token_regex: Regex,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreprocessor {
    /// Create a new text preprocessor
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"https?://\S+|www\.\S+").expect("url pattern"),
            mention_regex: Regex::new(r"@\w+").expect("mention pattern"),
            whitespace_regex: Regex::new(r"\s+").expect("whitespace pattern"),
            token_regex: Regex::new(r"[:;=]-?[()dp]|<3|\p{L}+(?:'\p{L}+)*|!")
                .expect("token pattern"),
        }
    }

    /// Preprocess text for sentiment scoring
    ///
    /// Steps:
    /// 1. Unicode normalization
    /// 2. Remove URLs
    /// 3. Remove mentions
    /// 4. Convert to lowercase
    /// 5. Normalize whitespace
    pub fn preprocess(&self, text: &str) -> String {
        // Curly apostrophes would split contractions like "don’t"
        let normalized: String = text
            .nfc()
            .map(|c| if c == '\u{2019}' { '\'' } else { c })
            .collect();

        let no_urls = self.url_regex.replace_all(&normalized, "");
        let no_mentions = self.mention_regex.replace_all(&no_urls, "");
        let lowercase = no_mentions.to_lowercase();
        let clean = self.whitespace_regex.replace_all(&lowercase, " ");

        clean.trim().to_string()
    }

    /// Split preprocessed text into word, emoticon and exclamation tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let clean = self.preprocess(text);
        self.token_regex
            .find_iter(&clean)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_basic() {
        let preprocessor = TextPreprocessor::new();
        assert_eq!(preprocessor.preprocess("  Hello   World  "), "hello world");
    }

    #[test]
    fn test_remove_urls_and_mentions() {
        let preprocessor = TextPreprocessor::new();
        let text = "@united Check this out https://t.co/abc great flight!";
        assert_eq!(preprocessor.preprocess(text), "check this out great flight!");
    }

    #[test]
    fn test_tokenize_keeps_contractions_and_emoticons() {
        let preprocessor = TextPreprocessor::new();
        let tokens = preprocessor.tokenize("I don’t like #delays :( but crew was GREAT!");
        assert_eq!(
            tokens,
            vec!["i", "don't", "like", "delays", ":(", "but", "crew", "was", "great", "!"]
        );
    }
}
