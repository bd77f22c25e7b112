// Request validation helpers.
//
// - `ValidatedJson<T>` extractor: content-type check + serde, with
//   structured error envelopes instead of plain-text axum rejections.
// - Field limits enforced at the HTTP boundary.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ErrorCode, ServiceError};

/// Maximum REST request body in bytes (1 MiB).
pub const MAX_REST_BODY_BYTES: usize = 1024 * 1024;

/// Maximum document title length in characters.
pub const MAX_TITLE_CHARS: usize = 200;

// ── ValidatedJson extractor ────────────────────────────────────────

/// A JSON body extractor that returns a structured `ServiceError` on failure.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => {
                let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ErrorCode::PayloadTooLarge
                } else {
                    ErrorCode::ValidationFailed
                };
                let (message, details) = classify_json_rejection(&rejection);
                tracing::warn!(%message, "rejected request body");
                Err(ServiceError::new(code, message).with_details(details).into_response())
            }
        }
    }
}

/// Classify a JSON rejection into a human-readable message and details object.
fn classify_json_rejection(rejection: &JsonRejection) -> (String, serde_json::Value) {
    match rejection {
        JsonRejection::JsonDataError(e) => (
            format!("invalid JSON payload: {e}"),
            serde_json::json!({ "kind": "data_error" }),
        ),
        JsonRejection::JsonSyntaxError(e) => (
            format!("malformed JSON: {e}"),
            serde_json::json!({ "kind": "syntax_error" }),
        ),
        JsonRejection::MissingJsonContentType(_) => (
            "expected Content-Type: application/json".to_string(),
            serde_json::json!({ "kind": "missing_content_type" }),
        ),
        JsonRejection::BytesRejection(e) => (
            format!("request body error: {e}"),
            serde_json::json!({ "kind": "body_error" }),
        ),
        other => (
            format!("request body error: {other}"),
            serde_json::json!({ "kind": "unknown" }),
        ),
    }
}

// ── Field limits ───────────────────────────────────────────────────

/// Reject titles longer than [`MAX_TITLE_CHARS`] characters.
pub fn check_title_length(title: &str) -> Result<(), String> {
    if title.chars().count() > MAX_TITLE_CHARS {
        Err(format!("Title cannot exceed {MAX_TITLE_CHARS} characters"))
    } else {
        Ok(())
    }
}
