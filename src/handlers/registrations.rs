use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use super::parse_id;
use crate::models::decode;
use crate::models::registration::{NewRegistration, RegistrationPatch};
use crate::routes::AppState;
use crate::utils::admin::{self, Gated};
use crate::utils::error::AppError;
use crate::utils::response::{created, deleted, ok};

const NOT_FOUND: &str = "Registration not found";

pub async fn list_registrations(State(state): State<AppState>) -> Result<Response, AppError> {
    let registrations = state.storage.registrations().await?;
    Ok(ok(registrations))
}

pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let registration = state
        .storage
        .registration(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(registration))
}

/// Public route: the registration form on the site posts here, so there is
/// no admin gate. The event-title business rule runs before the generic
/// field checks.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let new: NewRegistration = decode(body)?;
    let event_title = new.require_event_title()?.to_string();
    new.validate()?;
    let registration = state
        .storage
        .create_registration(&event_title, &new)
        .await?;
    Ok(created(registration))
}

pub async fn update_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let patch: RegistrationPatch = decode(payload)?;
    patch.validate()?;
    let registration = state
        .storage
        .update_registration(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(registration))
}

pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    if state.storage.delete_registration(id).await? {
        Ok(deleted())
    } else {
        Err(AppError::NotFound(NOT_FOUND.to_string()))
    }
}
