//! Binary logistic regression trained with batch gradient descent.
//!
//! # Example
//!
//! ```
//! use sentir::classification::LogisticRegression;
//! use sentir::primitives::{Matrix, Vector};
//!
//! let x = Matrix::from_vec(4, 1, vec![0.0, 0.1, 0.9, 1.0]).expect("4x1 matrix");
//! let y = Vector::from_slice(&[0.0, 0.0, 1.0, 1.0]);
//!
//! let mut model = LogisticRegression::new();
//! model.fit(&x, &y).expect("valid training data");
//!
//! let proba = model.predict_proba(&Vector::from_slice(&[0.95])).expect("fitted model");
//! assert!(proba > 0.5);
//! ```

use crate::error::{Result, SentirError};
use crate::primitives::{Matrix, Vector};

/// Logistic regression classifier with continuous targets in [0, 1].
///
/// Uses sigmoid activation and full-batch gradient descent. Every call
/// to [`fit`](LogisticRegression::fit) retrains from scratch on the
/// supplied dataset; parameters are never warm-started.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Model weights, one per feature (None until fitted)
    weights: Option<Vector<f32>>,
    /// Bias term
    bias: f32,
    /// Learning rate for gradient descent
    learning_rate: f32,
    /// Number of full passes over the training set
    iterations: usize,
}

impl LogisticRegression {
    /// Creates a new classifier with default hyperparameters
    /// (learning rate 0.01, 1000 iterations).
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
            learning_rate: 0.01,
            iterations: 1000,
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the number of gradient-descent iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sigmoid activation, computed without overflow for large |z|.
    fn sigmoid(z: f32) -> f32 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let e = z.exp();
            e / (1.0 + e)
        }
    }

    /// Fits the model to training data.
    ///
    /// Weights and bias are re-initialized to zero on every call, then
    /// updated with exactly `iterations` full-batch gradient passes; no
    /// early stopping, momentum, or regularization.
    ///
    /// # Arguments
    ///
    /// * `x` - Feature matrix (`n_samples` × `n_features`)
    /// * `y` - Target values in [0, 1] (`n_samples`)
    ///
    /// # Errors
    ///
    /// Returns an error if the sample counts of `x` and `y` differ, if
    /// `x` has zero samples, or if any target is outside [0, 1].
    pub fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples != y.len() {
            return Err("number of samples in x and y must match".into());
        }
        if n_samples == 0 {
            return Err("cannot fit with zero samples".into());
        }
        for label in y.iter() {
            if !(0.0..=1.0).contains(label) {
                return Err(format!("target {label} is outside [0, 1]").into());
            }
        }

        let mut weights = vec![0.0f32; n_features];
        let mut bias = 0.0f32;
        let n = n_samples as f32;

        for iter in 0..self.iterations {
            let mut predictions = Vec::with_capacity(n_samples);
            for i in 0..n_samples {
                let mut z = bias;
                for (j, &w) in weights.iter().enumerate() {
                    z += w * x.get(i, j);
                }
                predictions.push(Self::sigmoid(z));
            }

            let mut weight_grad = vec![0.0f32; n_features];
            let mut bias_grad = 0.0f32;
            for i in 0..n_samples {
                let error = predictions[i] - y[i];
                bias_grad += error;
                for (j, grad) in weight_grad.iter_mut().enumerate() {
                    *grad += error * x.get(i, j);
                }
            }

            for (w, grad) in weights.iter_mut().zip(&weight_grad) {
                *w -= self.learning_rate * grad / n;
            }
            bias -= self.learning_rate * bias_grad / n;

            if iter % 100 == 0 || iter + 1 == self.iterations {
                let correct = predictions
                    .iter()
                    .zip(y.iter())
                    .filter(|(p, t)| (**p > 0.5) == (**t > 0.5))
                    .count();
                let mse: f32 = predictions
                    .iter()
                    .zip(y.iter())
                    .map(|(p, t)| (p - t) * (p - t))
                    .sum::<f32>()
                    / n;
                log::debug!(
                    "iteration {iter}/{}: accuracy {:.2}%, loss {mse:.6}",
                    self.iterations,
                    correct as f32 / n * 100.0
                );
            }
        }

        self.weights = Some(Vector::from_vec(weights));
        self.bias = bias;
        log::info!("trained logistic regression on {n_samples} samples, {n_features} features");

        Ok(())
    }

    /// Raw linear score `bias + weights · x` (pre-sigmoid).
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the input length
    /// doesn't match the trained weight count.
    pub fn decision_function(&self, x: &Vector<f32>) -> Result<f32> {
        let weights = self.weights.as_ref().ok_or("model is not fitted")?;
        if x.len() != weights.len() {
            return Err(SentirError::DimensionMismatch {
                expected: format!("{} features", weights.len()),
                actual: format!("{}", x.len()),
            });
        }
        Ok(self.bias + weights.dot(x))
    }

    /// Probability in (0, 1) via `sigmoid(decision_function(x))`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as
    /// [`decision_function`](LogisticRegression::decision_function).
    pub fn predict_proba(&self, x: &Vector<f32>) -> Result<f32> {
        Ok(Self::sigmoid(self.decision_function(x)?))
    }

    /// Trained weights, or None before the first fit/restore.
    #[must_use]
    pub fn weights(&self) -> Option<&Vector<f32>> {
        self.weights.as_ref()
    }

    /// Bias term.
    #[must_use]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Restore parameters from persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if `weights` is empty; prior state is left
    /// untouched in that case.
    pub fn restore(&mut self, weights: Vector<f32>, bias: f32) -> Result<()> {
        if weights.is_empty() {
            return Err("cannot restore an empty weight vector".into());
        }
        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}
