//! License verification and issuance handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use gear_core::Plan;
use gear_licensing::Verification;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub license_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    pub message: Option<String>,
    /// Unix milliseconds.
    pub valid_until: Option<i64>,
    #[serde(rename = "type")]
    pub plan: Option<Plan>,
}

impl From<Verification> for VerifyResponse {
    fn from(result: Verification) -> Self {
        Self {
            valid: result.valid,
            message: Some(result.reason),
            valid_until: result.valid_until,
            plan: result.plan,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub license_key: String,
    #[serde(rename = "type")]
    pub plan: Plan,
}

/// Verify a license key. Invalid keys are reported in the body, never as
/// an error status.
pub async fn verify_license(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VerifyRequest>,
) -> Json<VerifyResponse> {
    let result = state.verifier.verify(&request.license_key);
    Json(result.into())
}

/// Issue a new key for `monthly` or `lifetime`.
pub async fn generate_license(
    State(state): State<Arc<AppState>>,
    Path(license_type): Path<String>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let key = state.issuer.issue_named(&license_type)?;
    let plan = key
        .plan()
        .ok_or_else(|| ApiError::Internal(format!("issued key has no plan: {}", key.plan_code())))?;

    Ok(Json(GenerateResponse {
        license_key: key.to_string(),
        plan,
    }))
}
