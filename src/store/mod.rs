//! Model persistence over an injected key-value substrate.
//!
//! The classifier state lives in three JSON records under fixed string
//! keys: vectorizer state, classifier parameters, and the raw training
//! log. Loading treats anything missing, unparseable, or structurally
//! invalid as "no model" rather than a fatal error; saving propagates
//! I/O failures.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::classification::LogisticRegression;
use crate::error::{Result, SentirError};
use crate::primitives::Vector;
use crate::stress::TrainingSample;
use crate::text::TfidfVectorizer;

/// Key under which vectorizer state is persisted.
pub const VECTORIZER_KEY: &str = "sentir_tfidf_model";
/// Key under which classifier parameters are persisted.
pub const CLASSIFIER_KEY: &str = "sentir_logreg_model";
/// Key under which the raw training log is persisted.
pub const TRAINING_LOG_KEY: &str = "sentir_training_log";

/// Version stamped into every persisted record; records with any other
/// version are treated as absent.
const SCHEMA_VERSION: u32 = 1;

/// Capability trait for the persistence substrate.
///
/// Implementations only need byte-level get/put; all record encoding
/// lives in [`ModelStore`].
pub trait KeyValueStore {
    /// Reads the bytes stored under `key`, or None if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the substrate itself fails.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes `bytes` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// File-backed key-value store: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct VectorizerRecord {
    schema_version: u32,
    vocabulary: Vec<(String, usize)>,
    idf: Vec<(String, f32)>,
}

#[derive(Serialize, Deserialize)]
struct ClassifierRecord {
    schema_version: u32,
    weights: Vec<f32>,
    bias: f32,
}

#[derive(Serialize, Deserialize)]
struct TrainingLogRecord {
    schema_version: u32,
    samples: Vec<TrainingSample>,
}

/// Scoped save/load operations for the model records.
#[derive(Debug)]
pub struct ModelStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ModelStore<S> {
    /// Wraps a key-value substrate.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Direct access to the underlying substrate.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("failed to read record under {key}: {e}");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("discarding unparseable record under {key}: {e}");
                None
            }
        }
    }

    fn write_record<T: Serialize>(&mut self, key: &str, record: &T) -> Result<()> {
        let bytes =
            serde_json::to_vec(record).map_err(|e| SentirError::Serialization(e.to_string()))?;
        self.store.put(key, &bytes)
    }

    /// Persists vectorizer state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the substrate write fails.
    pub fn save_vectorizer(&mut self, vectorizer: &TfidfVectorizer) -> Result<()> {
        let record = VectorizerRecord {
            schema_version: SCHEMA_VERSION,
            vocabulary: vectorizer.vocabulary_pairs(),
            idf: vectorizer.idf_pairs(),
        };
        self.write_record(VECTORIZER_KEY, &record)
    }

    /// Restores vectorizer state, returning false on any missing,
    /// unparseable, or structurally invalid record. The vectorizer is
    /// left untouched on failure.
    pub fn load_vectorizer(&self, vectorizer: &mut TfidfVectorizer) -> bool {
        let record: VectorizerRecord = match self.read_record(VECTORIZER_KEY) {
            Some(record) => record,
            None => return false,
        };
        if record.schema_version != SCHEMA_VERSION {
            log::warn!(
                "ignoring vectorizer record with schema version {}",
                record.schema_version
            );
            return false;
        }
        match vectorizer.restore(record.vocabulary, record.idf) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("discarding structurally invalid vectorizer record: {e}");
                false
            }
        }
    }

    /// Persists classifier parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted, or if serialization
    /// or the substrate write fails.
    pub fn save_classifier(&mut self, classifier: &LogisticRegression) -> Result<()> {
        let weights = classifier
            .weights()
            .ok_or("cannot persist an unfitted classifier")?;
        let record = ClassifierRecord {
            schema_version: SCHEMA_VERSION,
            weights: weights.as_slice().to_vec(),
            bias: classifier.bias(),
        };
        self.write_record(CLASSIFIER_KEY, &record)
    }

    /// Restores classifier parameters, returning false on any missing,
    /// unparseable, or structurally invalid record. The classifier is
    /// left untouched on failure.
    pub fn load_classifier(&self, classifier: &mut LogisticRegression) -> bool {
        let record: ClassifierRecord = match self.read_record(CLASSIFIER_KEY) {
            Some(record) => record,
            None => return false,
        };
        if record.schema_version != SCHEMA_VERSION {
            log::warn!(
                "ignoring classifier record with schema version {}",
                record.schema_version
            );
            return false;
        }
        match classifier.restore(Vector::from_vec(record.weights), record.bias) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("discarding structurally invalid classifier record: {e}");
                false
            }
        }
    }

    /// Persists the raw training log.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the substrate write fails.
    pub fn save_samples(&mut self, samples: &[TrainingSample]) -> Result<()> {
        let record = TrainingLogRecord {
            schema_version: SCHEMA_VERSION,
            samples: samples.to_vec(),
        };
        self.write_record(TRAINING_LOG_KEY, &record)
    }

    /// Loads the raw training log; missing or unreadable records yield
    /// an empty log.
    #[must_use]
    pub fn load_samples(&self) -> Vec<TrainingSample> {
        let record: TrainingLogRecord = match self.read_record(TRAINING_LOG_KEY) {
            Some(record) => record,
            None => return Vec::new(),
        };
        if record.schema_version != SCHEMA_VERSION {
            log::warn!(
                "ignoring training log with schema version {}",
                record.schema_version
            );
            return Vec::new();
        }
        record.samples
    }
}
