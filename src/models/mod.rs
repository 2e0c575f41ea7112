use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::error::AppError;

pub mod announcement;
pub mod event;
pub mod message;
pub mod registration;
pub mod team_member;
pub mod user;

/// Decodes a raw JSON payload into a typed request body. Shape failures are
/// validation errors, never transport errors, so callers can gate-check the
/// request before the payload is ever looked at.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload)
        .map_err(|e| AppError::ValidationError(format!("Invalid payload: {e}")))
}

/// Required string field: present and non-blank.
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// Same rule for a field supplied in a partial update: absent is fine,
/// present-but-blank is not.
pub(crate) fn require_if_present(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(value) => require(field, value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("title", "").is_err());
        assert!(require("title", "   ").is_err());
        assert!(require("title", "x").is_ok());
    }

    #[test]
    fn require_if_present_allows_absent() {
        assert!(require_if_present("title", None).is_ok());
        assert!(require_if_present("title", Some("")).is_err());
        assert!(require_if_present("title", Some("x")).is_ok());
    }
}
