use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require, require_if_present};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub social_links: Option<String>,
    // Display position; listings sort on this ascending.
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub social_links: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl NewTeamMember {
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        require("role", &self.role)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub social_links: Option<String>,
    pub order: Option<i32>,
}

impl TeamMemberPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        require_if_present("name", self.name.as_deref())?;
        require_if_present("role", self.role.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_defaults_to_zero() {
        let member: NewTeamMember = serde_json::from_value(serde_json::json!({
            "name": "Ayesha Khan",
            "role": "President"
        }))
        .unwrap();
        assert_eq!(member.order, 0);
        assert!(member.validate().is_ok());
    }

    #[test]
    fn social_links_uses_camel_case() {
        let member: NewTeamMember = serde_json::from_value(serde_json::json!({
            "name": "Ayesha Khan",
            "role": "President",
            "socialLinks": "{\"github\":\"https://github.com/akhan\"}"
        }))
        .unwrap();
        assert!(member.social_links.is_some());
    }

    #[test]
    fn blank_role_fails() {
        let member: NewTeamMember = serde_json::from_value(serde_json::json!({
            "name": "Ayesha Khan",
            "role": ""
        }))
        .unwrap();
        assert!(member.validate().is_err());
    }
}
