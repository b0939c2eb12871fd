//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sentir::prelude::*;
//! ```

pub use crate::classification::LogisticRegression;
pub use crate::error::{Result, SentirError};
pub use crate::primitives::{Matrix, Vector};
pub use crate::store::{FileStore, KeyValueStore, MemoryStore, ModelStore};
pub use crate::stress::{StressClassifier, TrainingReport, TrainingSample};
pub use crate::text::{TfidfVectorizer, Tokenizer, WordTokenizer};
