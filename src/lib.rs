//! Sentir: on-device text stress classification.
//!
//! Sentir turns free-text input (chat messages, journal entries) into a
//! 0-100 stress estimate using TF-IDF features scored by an
//! incrementally-retrained logistic regression model. All computation
//! is local and synchronous; model state persists across sessions
//! through an injected key-value store.
//!
//! # Quick Start
//!
//! ```
//! use sentir::prelude::*;
//!
//! let mut classifier = StressClassifier::new(MemoryStore::new());
//!
//! // Loads a persisted model, or bootstraps from built-in seed data
//! classifier.initialize().expect("seeding succeeds on an empty store");
//! assert!(classifier.is_ready());
//!
//! // Prediction never fails visibly
//! let score = classifier.predict("deadline pressure is overwhelming");
//! assert!(score <= 100);
//!
//! // Labeled samples accumulate; enough of them trigger a retrain
//! classifier
//!     .add_training_data("calm peaceful evening", 12)
//!     .expect("sample is recorded");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`text`]: Tokenization and TF-IDF vectorization
//! - [`classification`]: Logistic regression
//! - [`store`]: Key-value persistence and model records
//! - [`stress`]: The stress classifier lifecycle (bootstrap, retrain, predict)

pub mod classification;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod store;
pub mod stress;
pub mod text;

pub use error::{Result, SentirError};
