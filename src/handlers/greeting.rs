use crate::models::GreetingResponse;
use axum::{http::StatusCode, response::Json};

/// Fallback handler: every path other than `/health` lands here, regardless
/// of method. Always 200; the timestamp is captured per request.
pub async fn greeting() -> (StatusCode, Json<GreetingResponse>) {
    (StatusCode::OK, Json(GreetingResponse::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greeting_returns_200_with_fixed_fields() {
        let (status, Json(body)) = greeting().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Hello from ms-test microservice!");
        assert_eq!(body.version, "1.0.1");
    }
}
