use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::security_headers;

const DEFAULT_PORT: u16 = 3001;

// Fallback the original deployment shipped with. Anything real must set
// ADMIN_PASSWORD.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub struct Config {
    pub database_url: String,
    pub admin_password: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment. A missing `DATABASE_URL`
    /// is a fatal startup condition; everything else has a default.
    pub fn from_env() -> Result<Self, env::VarError> {
        let database_url = env::var("DATABASE_URL")?;

        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASSWORD not set, using the insecure built-in default");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Invalid PORT value '{}': {}, using {}", raw, e, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            admin_password,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_password(password: &str) -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            admin_password: password.to_string(),
            port: DEFAULT_PORT,
        }
    }

    #[test]
    fn missing_database_url_is_fatal() {
        std::env::remove_var("DATABASE_URL");
        assert!(Config::from_env().is_err());
    }

    #[test]
    fn config_holds_admin_password() {
        let config = config_with_password("secret");
        assert_eq!(config.admin_password, "secret");
    }
}
