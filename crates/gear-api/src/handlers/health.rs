//! Health check handlers.

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Gmail Attachment Renamer License API";

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Identity probe served at `/`.
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn ready() -> StatusCode {
    StatusCode::OK
}
