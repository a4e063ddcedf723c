use pulsegate::router::init_router;
use pulsegate::state::AppState;
use pulsegate_config::{AuthConfig, CorsConfig, JwtConfig};

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

#[allow(dead_code)]
pub const TEST_USERNAME: &str = "admin";
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "password";

pub fn state_with_secret(secret: &str) -> AppState {
    AppState {
        jwt_config: JwtConfig {
            secret: secret.to_string(),
            token_expiry: 3600,
        },
        auth_config: AuthConfig {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

pub fn test_state() -> AppState {
    state_with_secret(TEST_SECRET)
}

#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    init_router(test_state())
}

/// Spawn the app on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = init_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
