//! JWT creation and verification.
//!
//! Tokens are HS256-signed with the process-wide secret from
//! [`JwtConfig`]. Verification maps every failure mode (bad signature,
//! malformed token, expired token) to the same coarse error so callers
//! cannot distinguish a forged token from a merely expired one.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use pulsegate_config::JwtConfig;
use pulsegate_core::AppError;

use crate::claims::Claims;

/// Mints a bearer token for the given username.
///
/// The expiry is `now + jwt_config.token_expiry` seconds. Each call embeds a
/// fresh `jti`, so repeated issuance for the same username always produces a
/// distinct token.
///
/// # Errors
///
/// Returns an internal error if token encoding fails (e.g. invalid secret key).
pub fn create_token(username: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: username.to_string(),
        jti: Uuid::new_v4().to_string(),
        exp: (now + jwt_config.token_expiry) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a bearer token and returns the embedded claims.
///
/// # Errors
///
/// Returns a forbidden error if the signature does not match the current
/// secret, the token is malformed, or the token has expired. The three cases
/// are not distinguishable from the returned error.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::forbidden(anyhow!("Invalid or expired token")))
}
