pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::liveness_handler))
        .route("/health", get(health::health_handler))
        .route("/predict", post(handlers::handle_predict))
        .route("/api/predict_umum", post(handlers::handle_predict_position))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::classifier::linear::tests::sample_model;
    use crate::config::Config;
    use crate::dataset::{DatasetStore, HIGH_CONFIDENCE_FILE, LOW_CONFIDENCE_FILE};
    use crate::models::prediction::DatasetRow;
    use crate::pdf::PdfExtractor;
    use crate::prediction::{ConfidencePolicy, PredictionService};
    use crate::preprocess::{Language, TextNormalizer};

    const BOUNDARY: &str = "resume-boundary";

    struct TestApp {
        _dir: tempfile::TempDir,
        data_dir: PathBuf,
        upload_dir: PathBuf,
        state: AppState,
    }

    impl TestApp {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let data_dir = dir.path().join("data");
            let upload_dir = dir.path().join("uploads");
            let config = Config {
                port: 0,
                rust_log: "info".to_string(),
                model_path: PathBuf::from("unused.json"),
                data_dir: data_dir.clone(),
                upload_dir: upload_dir.clone(),
                language: Language::English,
                confidence_policy: ConfidencePolicy::Boost,
                max_upload_bytes: 1024 * 1024,
            };
            config.ensure_dirs().unwrap();

            let state = AppState {
                normalizer: Arc::new(TextNormalizer::new(config.language)),
                predictor: Arc::new(PredictionService::new(
                    Arc::new(sample_model()),
                    config.confidence_policy,
                )),
                extractor: PdfExtractor::new(upload_dir.clone()),
                datasets: DatasetStore::new(data_dir.clone()),
                config,
            };

            Self {
                _dir: dir,
                data_dir,
                upload_dir,
                state,
            }
        }

        async fn send(&self, request: Request<Body>) -> Response {
            build_router(self.state.clone())
                .oneshot(request)
                .await
                .unwrap()
        }

        fn stored_rows(&self) -> Vec<DatasetRow> {
            let mut rows = Vec::new();
            for file in [HIGH_CONFIDENCE_FILE, LOW_CONFIDENCE_FILE] {
                let path = self.data_dir.join(file);
                if path.exists() {
                    let mut reader = csv::Reader::from_path(path).unwrap();
                    for row in reader.deserialize::<DatasetRow>() {
                        rows.push(row.unwrap());
                    }
                }
            }
            rows
        }
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload_request(uri: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_liveness() {
        let app = TestApp::new();
        let response = app
            .send(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], health::LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let app = TestApp::new();
        let response = app
            .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["classes"], 3);
        assert_eq!(body["language"], "english");
        assert_eq!(body["confidence_policy"], "boost");
    }

    #[tokio::test]
    async fn test_predict_with_resume_text() {
        let app = TestApp::new();
        let response = app
            .send(json_request(
                "/predict",
                json!({
                    "resume_text": "Software engineer with 5 years experience in Python and cloud systems"
                }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["predicted_category"], "Software Engineering");

        let probabilities = body["probabilities"].as_object().unwrap();
        assert_eq!(probabilities.len(), 3);
        let total: f64 = probabilities.values().map(|v| v.as_f64().unwrap()).sum();
        assert!((total - 100.0).abs() <= 0.1, "probabilities sum to {total}");
        assert!(body["probability"].as_f64().unwrap() <= 98.0);

        assert_eq!(app.stored_rows().len(), 1);
    }

    #[tokio::test]
    async fn test_predict_position_returns_stored_record() {
        let app = TestApp::new();
        let response = app
            .send(json_request(
                "/api/predict_umum",
                json!({
                    "resume_text": "Recruiter handling hiring and payroll. Contact hr.lead@example.com"
                }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let posisi = body["posisi"].as_str().unwrap();
        assert_eq!(posisi, "Human Resources");
        assert!(body["probability"].as_str().unwrap().ends_with('%'));
        assert!(!body["cv_user"].as_str().unwrap().contains("@example.com"));

        let alternatives = body["top_5_positions"].as_object().unwrap();
        assert!(alternatives.len() <= 5);
        assert!(!alternatives.contains_key(posisi));

        let rows = app.stored_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, body["id"].as_str().unwrap());
        assert_eq!(rows[0].posisi, posisi);
    }

    #[tokio::test]
    async fn test_empty_file_name_is_rejected() {
        let app = TestApp::new();
        let response = app.send(upload_request("/predict", "", b"%PDF-1.4")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "No selected file" }));
        assert!(app.stored_rows().is_empty());
    }

    #[tokio::test]
    async fn test_missing_resume_data_is_rejected() {
        let app = TestApp::new();
        let response = app.send(json_request("/predict", json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "No resume data provided." })
        );
    }

    #[tokio::test]
    async fn test_pdf_upload_is_extracted_redacted_and_removed() {
        let app = TestApp::new();
        let pdf = include_bytes!("../../tests/fixtures/resume.pdf");
        let response = app
            .send(upload_request("/api/predict_umum", "resume.pdf", pdf))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let cv_user = body["cv_user"].as_str().unwrap();
        let compact: String = cv_user.split_whitespace().collect();
        assert!(compact.contains("Python"), "cv_user was {cv_user:?}");
        assert!(!cv_user.contains('@'), "cv_user was {cv_user:?}");
        assert!(dir_is_empty(&app.upload_dir));

        let rows = app.stored_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cv_user, cv_user);
    }

    #[tokio::test]
    async fn test_unreadable_upload_is_removed_and_still_predicted() {
        let app = TestApp::new();
        let response = app
            .send(upload_request("/api/predict_umum", "cv.pdf", b"not really a pdf"))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["cv_user"], "");
        assert!(dir_is_empty(&app.upload_dir));
        assert_eq!(app.stored_rows().len(), 1);
    }
}
