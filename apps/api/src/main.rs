mod classifier;
mod config;
mod dataset;
mod errors;
mod models;
mod pdf;
mod prediction;
mod preprocess;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::{Classifier, LinearClassifier};
use crate::config::Config;
use crate::dataset::DatasetStore;
use crate::pdf::PdfExtractor;
use crate::prediction::PredictionService;
use crate::preprocess::TextNormalizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume classifier v{}", env!("CARGO_PKG_VERSION"));

    config.ensure_dirs()?;
    info!(
        "Storing predictions in {} (uploads staged in {})",
        config.data_dir.display(),
        config.upload_dir.display()
    );

    // The service cannot answer anything without a model
    let classifier = LinearClassifier::from_path(&config.model_path).with_context(|| {
        format!(
            "Failed to load classifier from '{}'",
            config.model_path.display()
        )
    })?;
    info!("Classifier ready with {} classes", classifier.classes().len());

    let normalizer = TextNormalizer::new(config.language);
    info!(
        "Text normalizer: {} stopwords, confidence policy: {}",
        config.language, config.confidence_policy
    );

    let state = AppState {
        normalizer: Arc::new(normalizer),
        predictor: Arc::new(PredictionService::new(
            Arc::new(classifier),
            config.confidence_policy,
        )),
        extractor: PdfExtractor::new(config.upload_dir.clone()),
        datasets: DatasetStore::new(config.data_dir.clone()),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
