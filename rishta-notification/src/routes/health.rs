use axum::Json;

use rishta_shared::types::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("rishta-notification", env!("CARGO_PKG_VERSION")))
}
