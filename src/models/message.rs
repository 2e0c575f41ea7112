use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::require;
use crate::utils::error::AppError;

/// Contact-form message. Starts unread; admins flip `is_read` through the
/// dedicated mark-as-read route.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        let message = NewMessage {
            name: "Sana".to_string(),
            email: "sana@example.com".to_string(),
            message: String::new(),
        };
        assert!(message.validate().is_err());

        let message = NewMessage {
            message: "When is the next meetup?".to_string(),
            ..message
        };
        assert!(message.validate().is_ok());
    }
}
