/**
 * Error Conversion
 *
 * All API errors implement `IntoResponse` from Axum, so handlers can return
 * `Result<_, ApiError>` and use `?` everywhere.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Validation failed",
 *   "status": 400,
 *   "details": [{ "field": "email", "message": "Please provide a valid email address" }]
 * }
 * ```
 *
 * `details` is only present for validation failures.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal(detail) = &self {
            tracing::error!("Request failed: {}", detail);
        }

        let mut body = json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        if let Some(details) = self.details() {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}
