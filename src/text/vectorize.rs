//! TF-IDF vectorization over a bounded vocabulary.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::{Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Default upper bound on vocabulary size.
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// TF-IDF vectorizer that converts text into dense weighted feature
/// vectors.
///
/// `fit` learns a bounded vocabulary and inverse-document-frequency
/// weights from a corpus; `transform` maps any text onto a fixed-length
/// vector indexed by that vocabulary.
///
/// **TF-IDF formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of term t in d / total token count of d
/// idf(t)      = ln(N / df(t))
/// where N = fit documents, df(t) = fit documents containing t
/// ```
///
/// Vocabulary terms are the top `max_features` terms by raw global term
/// frequency across the fit corpus; ties keep first-seen order.
///
/// # Examples
///
/// ```
/// use sentir::text::TfidfVectorizer;
///
/// let docs = vec!["deadline pressure panic", "calm peaceful morning"];
/// let mut vectorizer = TfidfVectorizer::new();
/// vectorizer.fit(&docs).expect("fit succeeds");
///
/// let vector = vectorizer.transform("deadline panic again").expect("transform succeeds");
/// assert_eq!(vector.len(), vectorizer.vocabulary_size());
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    /// term -> dense feature index
    vocabulary: HashMap<String, usize>,
    /// IDF weight per feature index
    idf: Vec<f32>,
    max_features: usize,
}

impl TfidfVectorizer {
    /// Create a new vectorizer with the default tokenizer and feature
    /// bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            max_features: DEFAULT_MAX_FEATURES,
        }
    }

    /// Set maximum vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Learn vocabulary and IDF weights from documents.
    ///
    /// Any prior vocabulary and IDF table are replaced entirely. An
    /// empty document collection yields an empty vocabulary; subsequent
    /// transforms then return length-0 vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.vocabulary.clear();
        self.idf.clear();

        if documents.is_empty() {
            return Ok(());
        }

        let n_docs = documents.len();
        let mut term_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        // Terms in order of first appearance across the corpus; a stable
        // sort over this order breaks frequency ties by first-seen.
        let mut first_seen: Vec<String> = Vec::new();

        for doc in documents {
            let tokens = self.tokenizer.tokenize(doc.as_ref())?;
            let mut doc_terms: HashSet<String> = HashSet::new();

            for token in tokens {
                match term_freq.entry(token.clone()) {
                    Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(1);
                        first_seen.push(token.clone());
                    }
                }
                doc_terms.insert(token);
            }

            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked = first_seen;
        ranked.sort_by(|a, b| term_freq[b].cmp(&term_freq[a]));
        ranked.truncate(self.max_features);

        self.idf.reserve(ranked.len());
        for (idx, term) in ranked.into_iter().enumerate() {
            // df >= 1: every vocabulary term came out of the same corpus
            let df = doc_freq.get(&term).copied().unwrap_or(1);
            self.idf.push((n_docs as f32 / df as f32).ln());
            self.vocabulary.insert(term, idx);
        }

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// The vector length equals the vocabulary size; out-of-vocabulary
    /// terms and terms absent from the document contribute zero. A
    /// document with no surviving tokens yields an all-zero vector.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn transform(&self, document: &str) -> Result<Vector<f32>> {
        let tokens = self.tokenizer.tokenize(document)?;
        let mut values = vec![0.0f32; self.vocabulary.len()];

        if tokens.is_empty() || self.vocabulary.is_empty() {
            return Ok(Vector::from_vec(values));
        }

        // Term frequency denominator counts all tokens, in-vocabulary or not
        let total = tokens.len() as f32;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            if self.vocabulary.contains_key(token.as_str()) {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        for (term, count) in counts {
            if let Some(&idx) = self.vocabulary.get(term) {
                let tf = count as f32 / total;
                values[idx] = tf * self.idf[idx];
            }
        }

        Ok(Vector::from_vec(values))
    }

    /// Fit on documents, then transform each into a row of the result.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f32>> {
        self.fit(documents)?;
        let rows = documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_rows(&rows, self.vocabulary.len())
    }

    /// Get the learned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the IDF weights, indexed by feature index.
    #[must_use]
    pub fn idf(&self) -> &[f32] {
        &self.idf
    }

    /// Vocabulary as (term, index) pairs ordered by index.
    #[must_use]
    pub fn vocabulary_pairs(&self) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> = self
            .vocabulary
            .iter()
            .map(|(term, &idx)| (term.clone(), idx))
            .collect();
        pairs.sort_by_key(|&(_, idx)| idx);
        pairs
    }

    /// IDF table as (term, weight) pairs ordered by feature index.
    #[must_use]
    pub fn idf_pairs(&self) -> Vec<(String, f32)> {
        self.vocabulary_pairs()
            .into_iter()
            .map(|(term, idx)| {
                let weight = self.idf[idx];
                (term, weight)
            })
            .collect()
    }

    /// Restore vocabulary and IDF state from persisted pairs.
    ///
    /// Validates that indices form a dense `0..len` range and that every
    /// vocabulary term has exactly one IDF entry. On error the prior
    /// in-memory state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate terms, non-dense indices, or a
    /// vocabulary/IDF mismatch.
    pub fn restore(
        &mut self,
        vocabulary: Vec<(String, usize)>,
        idf: Vec<(String, f32)>,
    ) -> Result<()> {
        let n_terms = vocabulary.len();
        if idf.len() != n_terms {
            return Err(format!(
                "vocabulary has {n_terms} terms but idf table has {} entries",
                idf.len()
            )
            .into());
        }

        let mut vocab_map: HashMap<String, usize> = HashMap::with_capacity(n_terms);
        let mut index_seen = vec![false; n_terms];
        for (term, idx) in vocabulary {
            if idx >= n_terms || index_seen[idx] {
                return Err(format!("vocabulary indices are not a dense 0..{n_terms} range").into());
            }
            index_seen[idx] = true;
            if vocab_map.insert(term.clone(), idx).is_some() {
                return Err(format!("duplicate vocabulary term: {term}").into());
            }
        }

        let mut idf_values: Vec<Option<f32>> = vec![None; n_terms];
        for (term, weight) in idf {
            let idx = match vocab_map.get(&term) {
                Some(&idx) => idx,
                None => return Err(format!("idf entry for unknown term: {term}").into()),
            };
            if idf_values[idx].is_some() {
                return Err(format!("duplicate idf entry for term: {term}").into());
            }
            idf_values[idx] = Some(weight);
        }

        // Every slot filled: lengths match and entries are unique
        let idf_table: Vec<f32> = idf_values.into_iter().flatten().collect();
        debug_assert_eq!(idf_table.len(), n_terms);

        self.vocabulary = vocab_map;
        self.idf = idf_table;
        Ok(())
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
