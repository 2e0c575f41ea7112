use axum::response::Response;
use serde::Serialize;
use uuid::Uuid;

use crate::utils::response::ok;

pub mod announcements;
pub mod events;
pub mod messages;
pub mod registrations;
pub mod team;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    ok(HealthPayload {
        status: "ok",
        service: "techsoc-api",
    })
}

/// Route ids are opaque strings. Anything that is not a UUID can never
/// match a row, so callers treat a parse failure exactly like a missing
/// record.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
