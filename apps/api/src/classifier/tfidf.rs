use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// TF-IDF vectorizer over whitespace tokens, matching how the training
/// pipeline featurized already-normalized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term -> feature index
    pub vocabulary: HashMap<String, usize>,
    /// one idf weight per feature index
    pub idf: Vec<f64>,
    /// use `1 + ln(tf)` instead of raw counts
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl TfidfVectorizer {
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Sparse, L2-normalized feature vector as `(index, weight)` pairs sorted by index.
    /// Terms outside the vocabulary are ignored; text with no known terms maps to the zero vector.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + (count as f64).ln()
                } else {
                    count as f64
                };
                (index, tf * self.idf[index])
            })
            .collect();
        features.sort_by_key(|(index, _)| *index);

        let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in features.iter_mut() {
                *w /= norm;
            }
        }
        features
    }
}
