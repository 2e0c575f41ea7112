use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{require, require_if_present};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub event_title: String,
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public registration form payload. `event_title` is optional at the serde
/// level so a missing value surfaces through the business rule in
/// [`NewRegistration::require_event_title`] rather than as a decode failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    #[serde(default)]
    pub event_title: Option<String>,
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub phone: String,
}

impl NewRegistration {
    /// Business rule: a registration is meaningless without the event it
    /// registers for. Checked ahead of generic field validation.
    pub fn require_event_title(&self) -> Result<&str, AppError> {
        self.event_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .ok_or_else(|| AppError::ValidationError("eventTitle is required".to_string()))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        require("rollNo", &self.roll_no)?;
        require("email", &self.email)?;
        require("phone", &self.phone)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPatch {
    pub event_title: Option<String>,
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl RegistrationPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        require_if_present("eventTitle", self.event_title.as_deref())?;
        require_if_present("name", self.name.as_deref())?;
        require_if_present("rollNo", self.roll_no.as_deref())?;
        require_if_present("email", self.email.as_deref())?;
        require_if_present("phone", self.phone.as_deref())
    }
}
