use std::env;

use crate::environment::Environment;
use crate::error::ConfigError;

/// Development fallback username. Rejected at startup in production mode.
pub const DEFAULT_USERNAME: &str = "admin";
/// Development fallback password. Rejected at startup in production mode.
pub const DEFAULT_PASSWORD: &str = "password";

/// The single admin credential pair.
///
/// Loaded once at startup and immutable for the process lifetime. There is no
/// user database behind this; the configured pair is the source of truth.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            username: env::var("AUTH_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
            password: env::var("AUTH_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
        }
    }

    /// Startup validation. In production unset or default credentials are fatal.
    pub fn validate(&self, environment: &Environment) -> Result<(), ConfigError> {
        if environment.is_production()
            && (self.username.is_empty()
                || self.password.is_empty()
                || (self.username == DEFAULT_USERNAME && self.password == DEFAULT_PASSWORD))
        {
            return Err(ConfigError::DefaultCredentials);
        }
        Ok(())
    }
}
