use axum::Json;
use tracing::instrument;

use crate::middleware::auth::AuthUser;

use super::model::HealthResponse;
use super::service::HealthService;

/// Report API health (protected)
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 401, description = "No bearer token presented", body = crate::modules::auth::controller::ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = crate::modules::auth::controller::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Health"
)]
#[instrument(skip_all)]
pub async fn get_health(auth_user: AuthUser) -> Json<HealthResponse> {
    tracing::debug!(username = %auth_user.username(), "Health check requested");
    Json(HealthService::status())
}
