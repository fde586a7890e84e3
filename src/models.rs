use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "ms-test";
pub const SERVICE_VERSION: &str = "1.0.1";
pub const GREETING_MESSAGE: &str = "Hello from ms-test microservice!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub version: String,
    pub timestamp: String,
}

impl GreetingResponse {
    /// Builds a greeting stamped with the current wall-clock time, formatted
    /// as ISO-8601 UTC with millisecond precision (e.g. `2026-08-25T12:00:00.123Z`).
    pub fn now() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            version: SERVICE_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
