use chrono::Utc;

use super::model::HealthResponse;

pub struct HealthService;

impl HealthService {
    pub fn status() -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}
