use std::sync::Arc;

use crate::config::Config;
use crate::dataset::DatasetStore;
use crate::pdf::PdfExtractor;
use crate::prediction::PredictionService;
use crate::preprocess::TextNormalizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only except the dataset files, whose appends are serialized.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub normalizer: Arc<TextNormalizer>,
    /// Classifier loaded once at startup.
    pub predictor: Arc<PredictionService>,
    pub extractor: PdfExtractor,
    pub datasets: DatasetStore,
}
