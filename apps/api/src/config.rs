use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::prediction::ConfidencePolicy;
use crate::preprocess::Language;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub model_path: PathBuf,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub language: Language,
    pub confidence_policy: ConfidencePolicy,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            model_path: PathBuf::from(env_or("MODEL_PATH", "models/classifier.json")),
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            language: env_or("STOPWORD_LANGUAGE", "english")
                .parse()
                .context("STOPWORD_LANGUAGE must be 'english' or 'indonesian'")?,
            confidence_policy: env_or("CONFIDENCE_POLICY", "boost")
                .parse()
                .context("CONFIDENCE_POLICY must be 'boost' or 'passthrough'")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }

    /// Creates the data and upload directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.data_dir, &self.upload_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
        }
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
