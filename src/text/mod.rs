//! Text processing: tokenization and TF-IDF vectorization.

pub mod tokenize;
pub mod vectorize;

pub use tokenize::WordTokenizer;
pub use vectorize::TfidfVectorizer;

use crate::error::Result;

/// Trait for text tokenizers.
///
/// Tokenizers split raw text into a finite sequence of terms. All
/// implementations follow zero-unwrap safety.
pub trait Tokenizer {
    /// Splits text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
