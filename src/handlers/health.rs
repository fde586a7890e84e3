use crate::models::{HealthResponse, SERVICE_NAME};
use axum::{http::StatusCode, response::Json};

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    };

    (StatusCode::OK, Json(response))
}
