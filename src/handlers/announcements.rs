use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::parse_id;
use crate::models::announcement::{AnnouncementPatch, NewAnnouncement};
use crate::models::decode;
use crate::routes::AppState;
use crate::utils::admin::{self, Gated};
use crate::utils::error::AppError;
use crate::utils::response::{created, deleted, ok};

const NOT_FOUND: &str = "Announcement not found";

pub async fn list_announcements(State(state): State<AppState>) -> Result<Response, AppError> {
    let announcements = state.storage.announcements().await?;
    Ok(ok(announcements))
}

pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let announcement = state
        .storage
        .announcement(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(announcement))
}

pub async fn create_announcement(
    State(state): State<AppState>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let new: NewAnnouncement = decode(payload)?;
    new.validate()?;
    let announcement = state.storage.create_announcement(&new).await?;
    Ok(created(announcement))
}

pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let patch: AnnouncementPatch = decode(payload)?;
    patch.validate()?;
    let announcement = state
        .storage
        .update_announcement(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(announcement))
}

pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    if state.storage.delete_announcement(id).await? {
        Ok(deleted())
    } else {
        Err(AppError::NotFound(NOT_FOUND.to_string()))
    }
}
