use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use super::parse_id;
use crate::models::decode;
use crate::models::message::NewMessage;
use crate::routes::AppState;
use crate::utils::admin::{self, Gated};
use crate::utils::error::AppError;
use crate::utils::response::{created, deleted, ok};

const NOT_FOUND: &str = "Message not found";

/// Reading the inbox is admin-only, unlike the other collections. The
/// secret still travels in the body, the only credential channel the API
/// has.
pub async fn list_messages(
    State(state): State<AppState>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let messages = state.storage.messages().await?;
    Ok(ok(messages))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let message = state
        .storage
        .message(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(message))
}

/// Public route: the contact form posts here.
pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let new: NewMessage = decode(body)?;
    new.validate()?;
    let message = state.storage.create_message(&new).await?;
    Ok(created(message))
}

pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let message = state
        .storage
        .mark_message_read(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(message))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    if state.storage.delete_message(id).await? {
        Ok(deleted())
    } else {
        Err(AppError::NotFound(NOT_FOUND.to_string()))
    }
}
