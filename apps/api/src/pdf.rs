use std::io::Write;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to stage upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
}

/// Turns uploaded PDF bytes into text.
///
/// Each upload is written to a scratch file in `upload_dir`, extracted, and
/// removed when the scratch handle drops, so the file is gone whether
/// extraction succeeds, fails, or panics inside the PDF library.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    upload_dir: PathBuf,
}

impl PdfExtractor {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }

    /// Never fails: extraction problems are logged and produce empty text.
    pub async fn extract_upload(&self, bytes: Bytes) -> String {
        let dir = self.upload_dir.clone();
        match tokio::task::spawn_blocking(move || extract_staged(&dir, &bytes)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(error = %e, "PDF extraction failed; continuing with empty text");
                String::new()
            }
            Err(e) => {
                warn!(error = %e, "PDF extraction aborted; continuing with empty text");
                String::new()
            }
        }
    }
}

fn extract_staged(dir: &Path, bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut staged = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile_in(dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    debug!("Staged upload at {}", staged.path().display());

    extract_text(staged.path())
}

/// Extracts the text of every page, pages separated by whitespace.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractionError::Pdf(e.to_string()))
}
