use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::utils::error::AppError;

const INVALID_PASSWORD: &str = "Invalid admin password";

/// Body of a gated request: the shared admin secret alongside the raw
/// resource payload. The secret is compared before the payload is decoded,
/// so a bad secret is rejected no matter what the rest of the body looks
/// like, and the secret never reaches validation or storage.
#[derive(Debug, Deserialize)]
pub struct Gated {
    #[serde(rename = "adminPassword")]
    pub admin_password: Option<String>,
    #[serde(flatten)]
    pub payload: Value,
}

impl Gated {
    /// Checks the secret and hands back the payload with the secret
    /// stripped off.
    pub fn authorize(self, config: &Config) -> Result<Value, AppError> {
        verify(self.admin_password.as_deref(), config)?;
        Ok(self.payload)
    }
}

/// Exact-match check against the configured admin password. Missing and
/// wrong are the same outcome.
pub fn verify(given: Option<&str>, config: &Config) -> Result<(), AppError> {
    match given {
        Some(given) if given == config.admin_password => Ok(()),
        _ => Err(AppError::Forbidden(INVALID_PASSWORD.to_string())),
    }
}

/// Gate for an optionally decoded body. A request with no body, or one that
/// does not decode as a JSON object, cannot carry the secret, so it fails
/// the gate the same way a missing password does. The gate verdict never
/// depends on whether the payload itself is valid.
pub fn authorize_body(body: Option<Gated>, config: &Config) -> Result<Value, AppError> {
    let gated = body.ok_or_else(|| AppError::Forbidden(INVALID_PASSWORD.to_string()))?;
    gated.authorize(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            admin_password: "hunter2".to_string(),
            port: 3001,
        }
    }

    #[test]
    fn secret_is_stripped_from_payload() {
        let gated: Gated = serde_json::from_value(serde_json::json!({
            "adminPassword": "hunter2",
            "title": "X",
            "location": "Z"
        }))
        .unwrap();

        let payload = gated.authorize(&config()).unwrap();
        assert!(payload.get("adminPassword").is_none());
        assert_eq!(payload["title"], "X");
    }

    #[test]
    fn wrong_secret_is_forbidden() {
        let gated: Gated = serde_json::from_value(serde_json::json!({
            "adminPassword": "guess",
            "title": "X"
        }))
        .unwrap();
        assert!(matches!(
            gated.authorize(&config()),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn missing_secret_is_forbidden() {
        let gated: Gated = serde_json::from_value(serde_json::json!({ "title": "X" })).unwrap();
        assert!(matches!(
            gated.authorize(&config()),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn absent_body_is_forbidden() {
        assert!(matches!(
            authorize_body(None, &config()),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn present_body_still_goes_through_the_gate() {
        let gated: Gated = serde_json::from_value(serde_json::json!({
            "adminPassword": "hunter2",
            "title": "X"
        }))
        .unwrap();
        let payload = authorize_body(Some(gated), &config()).unwrap();
        assert_eq!(payload["title"], "X");
    }

    #[test]
    fn verify_requires_exact_match() {
        assert!(verify(Some("hunter2"), &config()).is_ok());
        assert!(verify(Some("HUNTER2"), &config()).is_err());
        assert!(verify(None, &config()).is_err());
    }
}
