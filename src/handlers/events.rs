use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::parse_id;
use crate::models::decode;
use crate::models::event::{EventPatch, NewEvent};
use crate::routes::AppState;
use crate::utils::admin::{self, Gated};
use crate::utils::error::AppError;
use crate::utils::response::{created, deleted, ok};

const NOT_FOUND: &str = "Event not found";

pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.storage.events().await?;
    Ok(ok(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let event = state
        .storage
        .event(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(event))
}

pub async fn create_event(
    State(state): State<AppState>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let new: NewEvent = decode(payload)?;
    new.validate()?;
    let event = state.storage.create_event(&new).await?;
    Ok(created(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let patch: EventPatch = decode(payload)?;
    patch.validate()?;
    let event = state
        .storage
        .update_event(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    if state.storage.delete_event(id).await? {
        Ok(deleted())
    } else {
        Err(AppError::NotFound(NOT_FOUND.to_string()))
    }
}
