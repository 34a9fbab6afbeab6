// Prediction workflow: confidence policy, classifier wrapper, request
// extraction and the two HTTP entry points built on them.

pub mod confidence;
pub mod handlers;
pub mod service;
pub mod submission;

pub use confidence::{ConfidenceBucket, ConfidencePolicy};
pub use service::PredictionService;
