use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require, require_if_present};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image: Option<String>,
    pub registration_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    // Display string, not a timestamp; the site renders it verbatim.
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("date", &self.date)?;
        require("location", &self.location)
    }
}

/// Partial update; only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub registration_link: Option<String>,
}

impl EventPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        require_if_present("title", self.title.as_deref())?;
        require_if_present("description", self.description.as_deref())?;
        require_if_present("date", self.date.as_deref())?;
        require_if_present("location", self.location.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_event() -> NewEvent {
        NewEvent {
            title: "Tech Taakra 2025".to_string(),
            description: "Annual flagship event".to_string(),
            date: "2025-03-15".to_string(),
            location: "Main Auditorium".to_string(),
            image: None,
            registration_link: None,
        }
    }

    #[test]
    fn valid_event_passes() {
        assert!(new_event().validate().is_ok());
    }

    #[test]
    fn blank_required_field_fails() {
        let mut event = new_event();
        event.location = "  ".to_string();
        assert!(event.validate().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let event: NewEvent = serde_json::from_value(serde_json::json!({
            "title": "X",
            "description": "Y",
            "date": "2025-01-01",
            "location": "Z",
            "registrationLink": "https://example.com/register"
        }))
        .unwrap();
        assert_eq!(
            event.registration_link.as_deref(),
            Some("https://example.com/register")
        );
    }

    #[test]
    fn patch_leaves_unsupplied_fields_absent() {
        let patch: EventPatch =
            serde_json::from_value(serde_json::json!({ "title": "New title" })).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.description.is_none());
        assert!(patch.location.is_none());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn patch_rejects_blank_required_field() {
        let patch = EventPatch {
            title: Some(String::new()),
            ..EventPatch::default()
        };
        assert!(patch.validate().is_err());
    }
}
