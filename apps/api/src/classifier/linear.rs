use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::classifier::tfidf::TfidfVectorizer;
use crate::classifier::{Classifier, PredictionError};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Multinomial linear model over TF-IDF features.
///
/// Artifact layout (JSON):
/// ```json
/// {
///   "classes": ["Data Science", "HR"],
///   "vectorizer": { "vocabulary": {"python": 0, "recruit": 1}, "idf": [1.2, 1.7], "sublinear_tf": true },
///   "coef": [[2.1, -0.4], [-0.8, 2.6]],
///   "intercept": [0.0, 0.1]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    classes: Vec<String>,
    vectorizer: TfidfVectorizer,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    pub fn new(
        classes: Vec<String>,
        vectorizer: TfidfVectorizer,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let model = Self {
            classes,
            vectorizer,
            coef,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Loads and validates an artifact. Called once at startup; failure is fatal.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&raw)?;
        info!(
            "Loaded classifier from {} ({} classes, {} features)",
            path.display(),
            model.classes.len(),
            model.vectorizer.n_features()
        );
        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let Self {
            classes,
            vectorizer,
            coef,
            intercept,
        } = serde_json::from_str(raw)?;
        Self::new(classes, vectorizer, coef, intercept)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let n_classes = self.classes.len();
        let n_features = self.vectorizer.n_features();

        if n_classes == 0 {
            return Err(ModelError::Invalid("no classes".into()));
        }
        let unique: HashSet<&String> = self.classes.iter().collect();
        if unique.len() != n_classes {
            return Err(ModelError::Invalid("duplicate class labels".into()));
        }
        if self.coef.len() != n_classes || self.intercept.len() != n_classes {
            return Err(ModelError::Invalid(format!(
                "{} classes but {} coef rows and {} intercepts",
                n_classes,
                self.coef.len(),
                self.intercept.len()
            )));
        }
        if let Some(row) = self.coef.iter().position(|r| r.len() != n_features) {
            return Err(ModelError::Invalid(format!(
                "coef row {row} has {} weights, expected {n_features}",
                self.coef[row].len()
            )));
        }
        if let Some((term, index)) = self
            .vectorizer
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= n_features)
        {
            return Err(ModelError::Invalid(format!(
                "vocabulary term '{term}' points at feature {index} of {n_features}"
            )));
        }
        let all_finite = self.vectorizer.idf.iter().all(|v| v.is_finite())
            && self.intercept.iter().all(|v| v.is_finite())
            && self.coef.iter().flatten().all(|v| v.is_finite());
        if !all_finite {
            return Err(ModelError::Invalid("non-finite weight".into()));
        }
        Ok(())
    }

    fn decision_function(&self, text: &str) -> Vec<f64> {
        let features = self.vectorizer.transform(text);
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| bias + features.iter().map(|(i, w)| row[*i] * w).sum::<f64>())
            .collect()
    }
}

impl Classifier for LinearClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, text: &str) -> Result<Vec<f64>, PredictionError> {
        Ok(softmax(&self.decision_function(text)))
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
