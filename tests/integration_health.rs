mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TEST_SECRET, test_app};
use http_body_util::BodyExt;
use pulsegate_auth::jwt::create_token;
use pulsegate_config::JwtConfig;
use serde_json::json;
use tower::ServiceExt;

fn health_request(auth_header: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/health");
    if let Some(value) = auth_header {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: 3600,
    }
}

#[tokio::test]
async fn test_health_without_token() {
    let app = test_app();

    let response = app.oneshot(health_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_health_with_garbage_token() {
    let app = test_app();

    let response = app
        .oneshot(health_request(Some("Bearer not.a.jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_health_with_non_bearer_header() {
    // A malformed credential is an invalid token, never "no token".
    let app = test_app();

    let response = app
        .oneshot(health_request(Some("Basic YWRtaW46cGFzc3dvcmQ=")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_health_with_valid_token() {
    let app = test_app();

    let token = create_token("admin", &test_jwt_config()).unwrap();

    let response = app
        .oneshot(health_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_with_expired_token() {
    let app = test_app();

    let expired_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: -3600,
    };
    let token = create_token("admin", &expired_config).unwrap();

    let response = app
        .oneshot(health_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_health_with_token_from_other_secret() {
    let app = test_app();

    let other_config = JwtConfig {
        secret: "a-completely-different-secret-key-here".to_string(),
        token_expiry: 3600,
    };
    let token = create_token("admin", &other_config).unwrap();

    let response = app
        .oneshot(health_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_login_then_health_flow() {
    let login_response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "username": "admin",
                        "password": "password"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(login_response.status(), StatusCode::OK);
    let login_body = body_json(login_response).await;
    let token = login_body["token"].as_str().unwrap();

    let response = test_app()
        .oneshot(health_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
