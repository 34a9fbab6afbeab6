use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;

pub const NO_SELECTED_FILE: &str = "No selected file";
pub const NO_RESUME_DATA: &str = "No resume data provided.";

/// A resume as posted by the client: either a PDF upload (multipart field
/// `file`) or raw text (JSON `{"resume_text": ...}` or multipart field
/// `resume_text`).
#[derive(Debug)]
pub enum ResumeSubmission {
    Text(String),
    Pdf { file_name: String, bytes: Bytes },
}

#[derive(Debug, Deserialize)]
struct ResumeTextBody {
    resume_text: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for ResumeSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
            .unwrap_or(false);

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return from_multipart(multipart).await;
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        from_json(&body)
    }
}

async fn from_multipart(mut multipart: Multipart) -> Result<ResumeSubmission, AppError> {
    let mut text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().trim().to_string();
                if file_name.is_empty() {
                    return Err(AppError::Validation(NO_SELECTED_FILE.to_string()));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                return Ok(ResumeSubmission::Pdf { file_name, bytes });
            }
            Some("resume_text") => {
                text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(e.body_text()))?,
                );
            }
            _ => {}
        }
    }

    text.map(ResumeSubmission::Text)
        .ok_or_else(|| AppError::Validation(NO_RESUME_DATA.to_string()))
}

fn from_json(body: &[u8]) -> Result<ResumeSubmission, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(NO_RESUME_DATA.to_string()));
    }

    let parsed: ResumeTextBody = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;

    parsed
        .resume_text
        .map(ResumeSubmission::Text)
        .ok_or_else(|| AppError::Validation(NO_RESUME_DATA.to_string()))
}
