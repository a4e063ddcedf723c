use std::env;

use crate::environment::Environment;
use crate::error::ConfigError;

/// Development fallback secret. Rejected at startup in production mode.
pub const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

const DEFAULT_TOKEN_EXPIRY: i64 = 86400; // 24 hours

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            token_expiry: env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY),
        }
    }

    /// Startup validation. In production an unset or default secret is fatal.
    pub fn validate(&self, environment: &Environment) -> Result<(), ConfigError> {
        if environment.is_production() && (self.secret.is_empty() || self.secret == DEFAULT_SECRET)
        {
            return Err(ConfigError::InsecureJwtSecret);
        }
        Ok(())
    }
}
