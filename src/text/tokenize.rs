//! Word tokenization for stress-signal text.

use super::Tokenizer;
use crate::error::Result;

/// Word tokenizer that normalizes case and punctuation and drops short
/// tokens.
///
/// Lowercases the input, replaces every character that is not a letter,
/// digit, or whitespace with a space, splits on whitespace runs, and
/// discards tokens of length <= 2 characters. Short tokens carry almost
/// no stress signal and would otherwise dominate the vocabulary.
///
/// Deterministic and pure; empty input yields an empty sequence.
///
/// # Examples
///
/// ```
/// use sentir::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Feeling overwhelmed, can't cope!").expect("tokenize is total");
/// assert_eq!(tokens, vec!["feeling", "overwhelmed", "can", "cope"]);
///
/// // Tokens of length <= 2 are dropped
/// let tokens = tokenizer.tokenize("it is a bad day").expect("tokenize is total");
/// assert_eq!(tokens, vec!["bad", "day"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        let tokens = normalized
            .split_whitespace()
            .filter(|token| token.chars().count() > 2)
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
