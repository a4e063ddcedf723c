use anyhow::anyhow;
use tracing::instrument;

use pulsegate_auth::credentials::verify_credentials;
use pulsegate_auth::jwt::create_token;
use pulsegate_config::{AuthConfig, JwtConfig};
use pulsegate_core::AppError;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Verify the submitted credentials and mint a bearer token.
    ///
    /// Verification is a pure, synchronous check; there is no database and
    /// no I/O behind it. A missing/empty field is a request-shape error
    /// (400), a mismatch is an authentication rejection (401) that never
    /// reveals which field was wrong.
    #[instrument(skip_all)]
    pub fn login(
        auth_config: &AuthConfig,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        if dto.username.is_empty() || dto.password.is_empty() {
            return Err(AppError::bad_request(anyhow!(
                "Username and password are required"
            )));
        }

        if !verify_credentials(auth_config, &dto.username, &dto.password) {
            return Err(AppError::unauthorized(anyhow!("Invalid credentials")));
        }

        let token = create_token(&dto.username, jwt_config)?;

        Ok(LoginResponse {
            token,
            message: "Login successful".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn test_configs() -> (AuthConfig, JwtConfig) {
        (
            AuthConfig {
                username: "admin".to_string(),
                password: "password".to_string(),
            },
            JwtConfig {
                secret: "test-secret-key-at-least-32-characters-long".to_string(),
                token_expiry: 3600,
            },
        )
    }

    #[test]
    fn test_login_success() {
        let (auth_config, jwt_config) = test_configs();
        let dto = LoginRequest {
            username: "admin".to_string(),
            password: "password".to_string(),
        };

        let response = AuthService::login(&auth_config, &jwt_config, dto).unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.message, "Login successful");
    }

    #[test]
    fn test_login_wrong_password_is_unauthorized() {
        let (auth_config, jwt_config) = test_configs();
        let dto = LoginRequest {
            username: "admin".to_string(),
            password: "letmein".to_string(),
        };

        let err = AuthService::login(&auth_config, &jwt_config, dto).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_login_empty_fields_is_bad_request() {
        let (auth_config, jwt_config) = test_configs();
        let dto = LoginRequest {
            username: "admin".to_string(),
            password: String::new(),
        };

        let err = AuthService::login(&auth_config, &jwt_config, dto).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Username and password are required");
    }
}
