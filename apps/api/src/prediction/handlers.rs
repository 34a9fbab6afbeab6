use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::prediction::{OrderedMap, PredictionRecord};
use crate::prediction::confidence::percent_rounded;
use crate::prediction::service::Prediction;
use crate::prediction::submission::ResumeSubmission;
use crate::preprocess::redact_personal_info;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub predicted_category: String,
    /// adjusted confidence, percent with two decimals
    pub probability: f64,
    /// every class, raw percent with two decimals
    pub probabilities: OrderedMap<f64>,
}

impl From<&Prediction> for CategoryResponse {
    fn from(p: &Prediction) -> Self {
        Self {
            predicted_category: p.label.clone(),
            probability: percent_rounded(p.adjusted_probability),
            probabilities: OrderedMap(
                p.probabilities
                    .iter()
                    .map(|(class, prob)| (class.clone(), percent_rounded(*prob)))
                    .collect(),
            ),
        }
    }
}

/// POST /predict
pub async fn handle_predict(
    State(state): State<AppState>,
    submission: ResumeSubmission,
) -> Result<Json<CategoryResponse>, AppError> {
    let (prediction, _record) = classify_and_store(&state, submission).await?;
    Ok(Json(CategoryResponse::from(&prediction)))
}

/// POST /api/predict_umum
pub async fn handle_predict_position(
    State(state): State<AppState>,
    submission: ResumeSubmission,
) -> Result<Json<PredictionRecord>, AppError> {
    let (_prediction, record) = classify_and_store(&state, submission).await?;
    Ok(Json(record))
}

/// extract -> redact -> normalize -> predict -> persist
async fn classify_and_store(
    state: &AppState,
    submission: ResumeSubmission,
) -> Result<(Prediction, PredictionRecord), AppError> {
    let raw_text = match submission {
        ResumeSubmission::Text(text) => text,
        ResumeSubmission::Pdf { file_name, bytes } => {
            info!("Received upload '{}' ({} bytes)", file_name, bytes.len());
            state.extractor.extract_upload(bytes).await
        }
    };

    // Redaction, normalization and scoring are CPU-bound.
    let normalizer = state.normalizer.clone();
    let predictor = state.predictor.clone();
    let (cv_text, prediction) = tokio::task::spawn_blocking(move || {
        let cv_text = redact_personal_info(&raw_text);
        let normalized = normalizer.normalize(&cv_text);
        predictor.predict(&normalized).map(|p| (cv_text, p))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let bucket = prediction.bucket;
    let record = prediction.clone().into_record(cv_text);
    if record.top_5_positions.is_empty() {
        debug!("Classifier has no alternative categories for {}", record.id);
    }
    state.datasets.append(&record, bucket).await?;

    info!(
        "Predicted '{}' at {} (raw {:.3}, {:?} confidence)",
        record.posisi, record.probability, prediction.raw_probability, bucket
    );
    Ok((prediction, record))
}
