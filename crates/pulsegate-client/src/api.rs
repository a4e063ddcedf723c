//! HTTP transport for the Pulsegate API.
//!
//! Thin wrapper around `reqwest` that maps response status codes to typed
//! [`SessionError`] values. The submitted password goes into the request
//! body and nowhere else; it is never logged or retained.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Deserialize)]
pub struct LoginSuccess {
    pub token: String,
    pub message: String,
}

/// Payload of the protected health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Submit the credential pair to `POST /api/login`.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginSuccess, SessionError> {
        let response = self
            .http
            .post(format!("{}/api/login", self.base_url))
            .json(&LoginBody { username, password })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => Err(SessionError::InvalidCredentials),
            StatusCode::BAD_REQUEST => {
                Err(SessionError::BadRequest(error_message(response).await))
            }
            status => Err(SessionError::Server {
                status: status.as_u16(),
                message: error_message(response).await,
            }),
        }
    }

    /// Call `GET /api/health` with the bearer token attached.
    ///
    /// Both 401 and 403 map to [`SessionError::Unauthenticated`]; the session
    /// manager treats either as a session-invalidation signal.
    pub async fn health(&self, token: &str) -> Result<HealthResponse, SessionError> {
        let response = self
            .http
            .get(format!("{}/api/health", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(SessionError::Unauthenticated)
            }
            status => Err(SessionError::Server {
                status: status.as_u16(),
                message: error_message(response).await,
            }),
        }
    }
}

async fn error_message(response: reqwest::Response) -> String {
    response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.base_url, "http://localhost:3001");
    }
}
