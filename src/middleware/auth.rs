use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::state::AppState;
use pulsegate_auth::Claims;
use pulsegate_auth::jwt::verify_token;
use pulsegate_core::AppError;

/// Extractor that validates the bearer token and provides the verified
/// claims to the handler.
///
/// This is the only path that attaches an identity to a request; handlers
/// never see unvalidated token data. The identity lives for the duration of
/// the request and nowhere else.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The authenticated username.
    pub fn username(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // No Authorization header at all: the caller never presented a
        // token, so ask them to authenticate (401).
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow!("Authentication required")))?;

        // A header that is present but not a bearer token counts as an
        // invalid token (403), never as a missing one.
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::forbidden(anyhow!("Invalid or expired token")))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
