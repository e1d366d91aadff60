//! HTTP request handlers for the FNOL service.
//!
//! Accepts raw text or an uploaded document, runs the extraction engine,
//! and serializes the routing result as JSON. Uploaded originals are
//! stored transiently and removed after decoding.

use crate::config::ServerConfig;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use fnol_decode::{DecodeError, TextOrigin};
use fnol_domain::RoutingResult;
use fnol_extractor::Extractor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The extraction engine; shared read-only across requests
    pub extractor: Arc<Extractor>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

/// Raw-text parse request
#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    /// The FNOL document body
    pub text: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// No text or file was supplied
    InputUnavailable(String),
    /// Document decoding failed
    Decode(DecodeError),
    /// Malformed multipart upload
    Upload(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InputUnavailable(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Decode(DecodeError::UnsupportedFormat(ext)) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported file format: {}", ext),
            ),
            AppError::Decode(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Upload(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        AppError::Decode(e)
    }
}

/// POST /api/parse-text - Extract and route a raw text body
async fn parse_text(
    State(state): State<AppState>,
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<RoutingResult>, AppError> {
    let text = request
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::InputUnavailable("Missing \"text\" in request body".to_string()))?;

    Ok(Json(state.extractor.extract_and_route(&text)))
}

/// POST /api/upload - Decode an uploaded document and route it
///
/// The original is stored under the configured upload directory only for
/// the duration of the request and removed afterwards, on error paths too.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RoutingResult>, AppError> {
    let stored = store_file_part(&state, &mut multipart).await?;
    let path = stored.ok_or_else(|| AppError::InputUnavailable("No file uploaded".to_string()))?;

    let decode_path = path.clone();
    let decoded = tokio::task::spawn_blocking(move || fnol_decode::decode_file(&decode_path))
        .await
        .map_err(|e| AppError::Internal(format!("Decode task failed: {}", e)));

    // Cleanup before inspecting the decode outcome
    if let Err(e) = tokio::fs::remove_file(&path).await {
        warn!(path = %path.display(), "failed to remove uploaded file: {}", e);
    }

    let decoded = decoded??;

    let text = if decoded.origin == TextOrigin::Converted && state.config.filter_converted_text {
        state.extractor.strip_line_noise(&decoded.text)
    } else {
        decoded.text
    };

    info!(chars = text.len(), "decoded upload");
    Ok(Json(state.extractor.extract_and_route(&text)))
}

/// Write the multipart "file" part to the upload directory
async fn store_file_part(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<Option<PathBuf>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(sanitize_file_name)
            .unwrap_or_else(|| "upload.txt".to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        tokio::fs::create_dir_all(&state.config.upload_dir)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = state.config.upload_dir.join(format!("{}-{}", millis, file_name));

        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        return Ok(Some(path));
    }

    Ok(None)
}

/// Keep only the final path component of a client-supplied file name
fn sanitize_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.txt")
        .to_string()
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/parse-text", post(parse_text))
        .route("/api/upload", post(upload))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        let mut config = ServerConfig::default_test_config();
        config.upload_dir = tempfile::tempdir().unwrap().into_path();
        AppState {
            extractor: Arc::new(Extractor::default_config().unwrap()),
            config: Arc::new(config),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_parse_text_returns_routing_result() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/parse-text")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"text": "Policy Number: ABC123\nDescription: Minor collision damage to the bumper."}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["recommendedRoute"], "Manual review");
        assert_eq!(json["extractedFields"]["Policy Number"], "ABC123");
    }

    #[tokio::test]
    async fn test_parse_text_missing_text_is_bad_request() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/parse-text")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("text"));
    }

    #[tokio::test]
    async fn test_upload_txt_file() {
        let state = create_test_state();
        let upload_dir = state.config.upload_dir.clone();
        let app = create_router(state);

        let boundary = "X-TEST-BOUNDARY";
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"notice.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Policy Number: ABC123\r\n\
             --{b}--\r\n",
            b = boundary
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["extractedFields"]["Policy Number"], "ABC123");

        // Transient storage was cleaned up
        let leftovers: Vec<_> = std::fs::read_dir(&upload_dir).unwrap().collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_upload_unsupported_format() {
        let app = create_router(create_test_state());

        let boundary = "X-TEST-BOUNDARY";
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"claim.docx\"\r\n\r\n\
             irrelevant\r\n\
             --{b}--\r\n",
            b = boundary
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_upload_without_file_part() {
        let app = create_router(create_test_state());

        let boundary = "X-TEST-BOUNDARY";
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"other\"\r\n\r\n\
             value\r\n\
             --{b}--\r\n",
            b = boundary
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
