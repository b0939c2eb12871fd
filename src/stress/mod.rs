//! Stress classifier lifecycle: bootstrap, training, prediction.
//!
//! [`StressClassifier`] owns a TF-IDF vectorizer and a logistic
//! regression model, persists them through an injected key-value store,
//! and exposes a predict operation that never fails visibly: before the
//! model is ready, or on any internal error, it answers with a neutral
//! score of 50.
//!
//! # Example
//!
//! ```
//! use sentir::store::MemoryStore;
//! use sentir::stress::StressClassifier;
//!
//! let mut classifier = StressClassifier::new(MemoryStore::new());
//! classifier.initialize().expect("seeding succeeds on an empty store");
//! assert!(classifier.is_ready());
//!
//! let score = classifier.predict("deadline pressure panic");
//! assert!(score <= 100);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::classification::LogisticRegression;
use crate::error::Result;
use crate::primitives::{Matrix, Vector};
use crate::store::{KeyValueStore, ModelStore};
use crate::text::TfidfVectorizer;

/// Minimum sample count for any retrain.
pub const MIN_TRAINING_SAMPLES: usize = 5;
/// Cumulative sample count at which `add_training_data` retrains.
pub const RETRAIN_THRESHOLD: usize = 10;
/// Score returned when the model is not ready or prediction fails.
pub const NEUTRAL_SCORE: u8 = 50;
/// Upper bound of the stress scale.
pub const MAX_STRESS_LEVEL: u8 = 100;

/// A labeled text sample in the training log.
///
/// Samples are immutable once recorded; the log is append-only and
/// insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Raw text as supplied by the caller
    pub text: String,
    /// Human-provided stress label on the 0-100 scale
    pub stress_level: u8,
    /// Capture time, milliseconds since the Unix epoch
    pub timestamp_ms: u64,
}

impl TrainingSample {
    /// Creates a sample stamped with the current time. Stress levels
    /// above 100 are clamped.
    #[must_use]
    pub fn new(text: impl Into<String>, stress_level: u8) -> Self {
        Self {
            text: text.into(),
            stress_level: stress_level.min(MAX_STRESS_LEVEL),
            timestamp_ms: now_ms(),
        }
    }

    /// Normalized training label in [0, 1].
    #[must_use]
    pub fn label(&self) -> f32 {
        f32::from(self.stress_level) / f32::from(MAX_STRESS_LEVEL)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Outcome of an explicit retrain over the persisted log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingReport {
    /// Number of samples the model was trained on
    pub data_points: usize,
    /// True when the log was too small and synthetic data was used
    pub seeded: bool,
}

/// Text-stress classifier with a persistence-backed lifecycle.
///
/// Construction performs no I/O; call
/// [`initialize`](StressClassifier::initialize) once at startup to load
/// a persisted model or bootstrap from built-in synthetic data.
pub struct StressClassifier<S: KeyValueStore> {
    vectorizer: TfidfVectorizer,
    classifier: LogisticRegression,
    store: ModelStore<S>,
    ready: bool,
}

impl<S: KeyValueStore> StressClassifier<S> {
    /// Creates an uninitialized classifier over the given substrate.
    pub fn new(store: S) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
            classifier: LogisticRegression::new(),
            store: ModelStore::new(store),
            ready: false,
        }
    }

    /// True once a model has been loaded or trained.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Loads the persisted model, falling back to synthetic seeding
    /// when either record is absent or unusable. Idempotent; safe to
    /// call once at startup.
    ///
    /// # Errors
    ///
    /// Returns an error only if seeding itself fails (training or
    /// persistence); a missing or corrupt persisted model is not an
    /// error.
    pub fn initialize(&mut self) -> Result<()> {
        let vectorizer_loaded = self.store.load_vectorizer(&mut self.vectorizer);
        let classifier_loaded = self.store.load_classifier(&mut self.classifier);

        if vectorizer_loaded && classifier_loaded && self.records_consistent() {
            self.ready = true;
            log::info!("stress classifier restored from persisted model");
            return Ok(());
        }

        self.seed_with_synthetic_data()
    }

    /// The two records are only usable together when the classifier was
    /// trained against this exact vocabulary.
    fn records_consistent(&self) -> bool {
        let n_features = self.classifier.weights().map_or(0, Vector::len);
        if n_features == self.vectorizer.vocabulary_size() {
            true
        } else {
            log::warn!(
                "persisted records disagree: {n_features} weights vs {} vocabulary terms",
                self.vectorizer.vocabulary_size()
            );
            false
        }
    }

    /// Persists the built-in labeled corpus, trains on it, and
    /// transitions to ready. This is the cold-start path; it guarantees
    /// a usable model even with zero real user data.
    ///
    /// # Errors
    ///
    /// Returns an error if training or persistence fails.
    pub fn seed_with_synthetic_data(&mut self) -> Result<()> {
        let samples = synthetic_seed_corpus();
        self.store.save_samples(&samples)?;
        self.train(&samples)?;
        log::info!(
            "stress classifier seeded with {} synthetic samples",
            samples.len()
        );
        Ok(())
    }

    /// Retrains the full pipeline on `data`: vectorizer vocabulary and
    /// IDF, then classifier parameters from scratch, then persists both
    /// records.
    ///
    /// Fewer than [`MIN_TRAINING_SAMPLES`] samples is a logged no-op
    /// that leaves all state unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or persistence fails.
    pub fn train(&mut self, data: &[TrainingSample]) -> Result<()> {
        if data.len() < MIN_TRAINING_SAMPLES {
            log::warn!(
                "skipping training: {} samples, need at least {MIN_TRAINING_SAMPLES}",
                data.len()
            );
            return Ok(());
        }

        let texts: Vec<&str> = data.iter().map(|sample| sample.text.as_str()).collect();
        let labels: Vec<f32> = data.iter().map(TrainingSample::label).collect();

        self.vectorizer.fit(&texts)?;
        let rows = texts
            .iter()
            .map(|text| self.vectorizer.transform(text))
            .collect::<Result<Vec<_>>>()?;
        let x = Matrix::from_rows(&rows, self.vectorizer.vocabulary_size())?;
        self.classifier.fit(&x, &Vector::from_vec(labels))?;

        self.store.save_vectorizer(&self.vectorizer)?;
        self.store.save_classifier(&self.classifier)?;
        self.ready = true;
        Ok(())
    }

    /// Estimates the stress level of `text` on the 0-100 scale.
    ///
    /// Never fails visibly: an unready model or any internal error
    /// yields the neutral score 50.
    #[must_use]
    pub fn predict(&self, text: &str) -> u8 {
        if !self.ready {
            log::warn!("stress classifier not ready, returning neutral score");
            return NEUTRAL_SCORE;
        }
        match self.predict_score(text) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("prediction failed, returning neutral score: {e}");
                NEUTRAL_SCORE
            }
        }
    }

    fn predict_score(&self, text: &str) -> Result<u8> {
        let vector = self.vectorizer.transform(text)?;
        let proba = self.classifier.predict_proba(&vector)?;
        Ok((proba * f32::from(MAX_STRESS_LEVEL)).round() as u8)
    }

    /// Appends a sample to the persisted training log and, once the
    /// cumulative count reaches [`RETRAIN_THRESHOLD`], synchronously
    /// retrains on the entire accumulated log.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence or a triggered retrain fails.
    pub fn add_training_data(&mut self, text: &str, stress_level: u8) -> Result<()> {
        let mut samples = self.store.load_samples();
        samples.push(TrainingSample::new(text, stress_level));
        self.store.save_samples(&samples)?;

        if samples.len() >= RETRAIN_THRESHOLD {
            self.train(&samples)?;
        }
        Ok(())
    }

    /// Explicitly retrains from the persisted log; a log below the
    /// minimum falls back to synthetic seeding.
    ///
    /// # Errors
    ///
    /// Returns an error if training or persistence fails.
    pub fn retrain_from_log(&mut self) -> Result<TrainingReport> {
        let samples = self.store.load_samples();
        if samples.len() < MIN_TRAINING_SAMPLES {
            self.seed_with_synthetic_data()?;
            return Ok(TrainingReport {
                data_points: synthetic_seed_corpus().len(),
                seeded: true,
            });
        }

        let data_points = samples.len();
        self.train(&samples)?;
        Ok(TrainingReport {
            data_points,
            seeded: false,
        })
    }
}

/// Hand-authored phrases spanning high, medium, and low stress.
fn synthetic_seed_corpus() -> Vec<TrainingSample> {
    const SEED: &[(&str, u8)] = &[
        ("I'm feeling overwhelmed anxious stressed can't cope", 85),
        ("Everything is too much pressure deadline worry panic", 90),
        ("Nervous tension headache exhausted burnout tired", 80),
        ("Feeling okay decent manageable normal routine", 40),
        ("Little stressed but handling it fine working through", 50),
        ("Some pressure but under control stable balanced", 45),
        ("Calm relaxed peaceful content happy energized", 10),
        ("Great day wonderful motivated focused productive", 15),
        ("Feeling good positive balanced clear minded", 20),
    ];
    SEED.iter()
        .map(|&(text, level)| TrainingSample::new(text, level))
        .collect()
}
