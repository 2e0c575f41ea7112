use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require, require_if_present};
use crate::utils::error::AppError;

/// `kind` is `type` on the wire and in the table; the site uses it as a
/// badge label (Opportunity, Event, Notice, Result).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

impl NewAnnouncement {
    pub fn validate(&self) -> Result<(), AppError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        require("type", &self.kind)?;
        require("date", &self.date)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
}

impl AnnouncementPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        require_if_present("title", self.title.as_deref())?;
        require_if_present("content", self.content.as_deref())?;
        require_if_present("type", self.kind.as_deref())?;
        require_if_present("date", self.date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_type_on_the_wire() {
        let announcement: NewAnnouncement = serde_json::from_value(serde_json::json!({
            "title": "Hackathon results",
            "content": "Winners announced.",
            "type": "Result",
            "date": "2025-03-20"
        }))
        .unwrap();
        assert_eq!(announcement.kind, "Result");
        assert!(announcement.validate().is_ok());
    }

    #[test]
    fn every_field_is_required() {
        let announcement: NewAnnouncement = serde_json::from_value(serde_json::json!({
            "title": "Hackathon results",
            "content": "",
            "type": "Result",
            "date": "2025-03-20"
        }))
        .unwrap();
        assert!(announcement.validate().is_err());
    }
}
