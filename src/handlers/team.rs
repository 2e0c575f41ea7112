use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::parse_id;
use crate::models::decode;
use crate::models::team_member::{NewTeamMember, TeamMemberPatch};
use crate::routes::AppState;
use crate::utils::admin::{self, Gated};
use crate::utils::error::AppError;
use crate::utils::response::{created, deleted, ok};

const NOT_FOUND: &str = "Team member not found";

/// Listing is already sorted by display position, then insertion.
pub async fn list_members(State(state): State<AppState>) -> Result<Response, AppError> {
    let members = state.storage.team_members().await?;
    Ok(ok(members))
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let member = state
        .storage
        .team_member(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(member))
}

pub async fn create_member(
    State(state): State<AppState>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let new: NewTeamMember = decode(payload)?;
    new.validate()?;
    let member = state.storage.create_team_member(&new).await?;
    Ok(created(member))
}

pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    let payload = admin::authorize_body(body.map(|Json(b)| b), &state.config)?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    let patch: TeamMemberPatch = decode(payload)?;
    patch.validate()?;
    let member = state
        .storage
        .update_team_member(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ok(member))
}

pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Gated>>,
) -> Result<Response, AppError> {
    admin::verify(
        body.as_ref().and_then(|b| b.admin_password.as_deref()),
        &state.config,
    )?;
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    if state.storage.delete_team_member(id).await? {
        Ok(deleted())
    } else {
        Err(AppError::NotFound(NOT_FOUND.to_string()))
    }
}
