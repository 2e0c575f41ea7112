use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// 200 with the record or collection as the body.
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// 201 with the freshly persisted record, generated fields included.
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// 200 `{"success": true}`, the delete acknowledgement shape.
pub fn deleted() -> Response {
    (StatusCode::OK, Json(json!({ "success": true }))).into_response()
}

/// Error descriptor: `{"error": "<message>"}` with the given status.
pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
