use std::cmp::Ordering;
use std::sync::Arc;

use uuid::Uuid;

use crate::classifier::{Classifier, PredictionError};
use crate::models::prediction::{OrderedMap, PredictionRecord, TopAlternatives};
use crate::prediction::confidence::{format_percent, ConfidenceBucket, ConfidencePolicy};

/// At most this many runner-up categories are reported.
pub const MAX_ALTERNATIVES: usize = 5;

/// Outcome of classifying one normalized resume.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    /// classifier probability of `label`
    pub raw_probability: f64,
    /// `raw_probability` after the confidence policy
    pub adjusted_probability: f64,
    /// every class with its raw probability, in classifier order
    pub probabilities: Vec<(String, f64)>,
    pub alternatives: TopAlternatives,
    pub bucket: ConfidenceBucket,
}

impl Prediction {
    /// Freezes the prediction into the record stored and returned to the caller.
    pub fn into_record(self, cv_text: String) -> PredictionRecord {
        PredictionRecord {
            id: Uuid::new_v4(),
            posisi: self.label,
            cv_user: cv_text,
            probability: format_percent(self.adjusted_probability),
            top_5_positions: self.alternatives,
        }
    }
}

/// Wraps the loaded classifier. Built once at startup and shared read-only
/// across requests.
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
    policy: ConfidencePolicy,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn Classifier>, policy: ConfidencePolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn policy(&self) -> ConfidencePolicy {
        self.policy
    }

    pub fn class_count(&self) -> usize {
        self.classifier.classes().len()
    }

    /// Classifies normalized text. Empty text is allowed and simply yields a
    /// low-information prediction.
    pub fn predict(&self, normalized_text: &str) -> Result<Prediction, PredictionError> {
        let output = self.classifier.predict(normalized_text)?;
        let raw_probability = output.label_probability();
        let adjusted_probability = self.policy.adjust(raw_probability);
        let alternatives = rank_alternatives(&output.probabilities, &output.label);

        Ok(Prediction {
            label: output.label,
            raw_probability,
            adjusted_probability,
            probabilities: output.probabilities,
            alternatives,
            bucket: ConfidenceBucket::for_probability(adjusted_probability),
        })
    }
}

/// Top runner-ups by descending raw probability, excluding `label`.
/// Ties keep classifier order.
fn rank_alternatives(probabilities: &[(String, f64)], label: &str) -> TopAlternatives {
    let mut ranked: Vec<&(String, f64)> = probabilities.iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    OrderedMap(
        ranked
            .into_iter()
            .filter(|(class, _)| class != label)
            .take(MAX_ALTERNATIVES)
            .map(|(class, p)| (class.clone(), format_percent(*p)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::linear::tests::sample_model;

    struct Fixed {
        classes: Vec<String>,
        probabilities: Vec<f64>,
    }

    impl Classifier for Fixed {
        fn classes(&self) -> &[String] {
            &self.classes
        }

        fn predict_proba(&self, _text: &str) -> Result<Vec<f64>, PredictionError> {
            Ok(self.probabilities.clone())
        }
    }

    fn service(probabilities: &[f64], policy: ConfidencePolicy) -> PredictionService {
        let classes = (0..probabilities.len()).map(|i| format!("class_{i}")).collect();
        PredictionService::new(
            Arc::new(Fixed {
                classes,
                probabilities: probabilities.to_vec(),
            }),
            policy,
        )
    }

    #[test]
    fn test_alternatives_exclude_label_and_cap_at_five() {
        let s = service(
            &[0.05, 0.40, 0.10, 0.15, 0.08, 0.07, 0.06, 0.09],
            ConfidencePolicy::Boost,
        );
        let p = s.predict("anything").unwrap();
        assert_eq!(p.label, "class_1");
        assert_eq!(p.alternatives.len(), MAX_ALTERNATIVES);
        assert!(!p.alternatives.contains_key("class_1"));

        let order: Vec<&str> = p.alternatives.0.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, ["class_3", "class_2", "class_7", "class_4", "class_5"]);
        assert_eq!(p.alternatives.0[0].1, "15.0%");
    }

    #[test]
    fn test_fewer_classes_than_cap() {
        let s = service(&[0.7, 0.3], ConfidencePolicy::Boost);
        let p = s.predict("").unwrap();
        assert_eq!(p.alternatives.len(), 1);
        assert!(p.alternatives.contains_key("class_1"));
    }

    #[test]
    fn test_boost_policy_and_bucket() {
        let p = service(&[0.5, 0.3, 0.2], ConfidencePolicy::Boost)
            .predict("x")
            .unwrap();
        assert!((p.raw_probability - 0.5).abs() < 1e-9);
        assert!((p.adjusted_probability - 0.8).abs() < 1e-9);
        assert_eq!(p.bucket, ConfidenceBucket::High);

        let p = service(&[0.2, 0.15, 0.15, 0.15, 0.15, 0.1, 0.1], ConfidencePolicy::Boost)
            .predict("x")
            .unwrap();
        assert!((p.adjusted_probability - 0.2).abs() < 1e-9);
        assert_eq!(p.bucket, ConfidenceBucket::Low);
    }

    #[test]
    fn test_passthrough_policy_and_bucket() {
        let p = service(&[0.5, 0.3, 0.2], ConfidencePolicy::Passthrough)
            .predict("x")
            .unwrap();
        assert!((p.adjusted_probability - 0.5).abs() < 1e-9);
        assert_eq!(p.bucket, ConfidenceBucket::Low);
    }

    #[test]
    fn test_record_carries_adjusted_percent() {
        let record = service(&[0.9, 0.1], ConfidencePolicy::Boost)
            .predict("x")
            .unwrap()
            .into_record("redacted text".to_string());
        assert_eq!(record.posisi, "class_0");
        assert_eq!(record.probability, "98.0%");
        assert_eq!(record.cv_user, "redacted text");
        assert_eq!(record.top_5_positions.summary(), "class_1 (10.0%)");
    }

    #[test]
    fn test_with_linear_model() {
        let s = PredictionService::new(Arc::new(sample_model()), ConfidencePolicy::Boost);
        let p = s.predict("recruit hire payrol").unwrap();
        assert_eq!(p.label, "Human Resources");
        assert_eq!(p.alternatives.len(), 2);
        let total: f64 = p.probabilities.iter().map(|(_, v)| v).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
