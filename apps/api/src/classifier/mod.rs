//! Classifier boundary. The rest of the service treats the model as a black
//! box: normalized text in, one probability per class out.
//!
//! `PredictionService` holds an `Arc<dyn Classifier>`, loaded once at startup.

pub mod linear;
pub mod tfidf;

use thiserror::Error;

pub use linear::LinearClassifier;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("classifier has no classes")]
    NoClasses,

    #[error("classifier returned {got} probabilities for {expected} classes")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("classifier returned a non-finite probability")]
    NonFinite,
}

/// Label plus the full per-class distribution, in the classifier's class order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOutput {
    pub label: String,
    pub probabilities: Vec<(String, f64)>,
}

impl ClassifierOutput {
    /// Probability of the predicted label.
    pub fn label_probability(&self) -> f64 {
        self.probabilities
            .iter()
            .find(|(class, _)| *class == self.label)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }
}

pub trait Classifier: Send + Sync {
    fn classes(&self) -> &[String];

    /// One probability per entry of `classes()`, summing to 1.
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>, PredictionError>;

    /// Predicted label is the first class holding the maximum probability.
    fn predict(&self, text: &str) -> Result<ClassifierOutput, PredictionError> {
        let classes = self.classes();
        if classes.is_empty() {
            return Err(PredictionError::NoClasses);
        }

        let probabilities = self.predict_proba(text)?;
        if probabilities.len() != classes.len() {
            return Err(PredictionError::ShapeMismatch {
                expected: classes.len(),
                got: probabilities.len(),
            });
        }
        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(PredictionError::NonFinite);
        }

        let mut best = 0;
        for (i, p) in probabilities.iter().enumerate() {
            if *p > probabilities[best] {
                best = i;
            }
        }

        Ok(ClassifierOutput {
            label: classes[best].clone(),
            probabilities: classes.iter().cloned().zip(probabilities).collect(),
        })
    }
}
