use gear_api::handlers::licenses::{GenerateResponse, VerifyRequest, VerifyResponse};
use gear_core::Plan;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Request(reqwest::Error),
    BadRequest(String),
    Server(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Request failed: {}", e),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Server(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for a running license API.
pub struct LicenseClient {
    client: Client,
    base_url: String,
}

impl LicenseClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn verify(&self, license_key: &str) -> Result<VerifyResponse, ApiError> {
        let request = VerifyRequest {
            license_key: license_key.to_string(),
        };
        let res = self
            .client
            .post(self.url("/verify"))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Request)?;

        match res.status() {
            StatusCode::OK => res.json().await.map_err(ApiError::Request),
            _ => Err(ApiError::Server(res.status().to_string())),
        }
    }

    pub async fn generate(&self, plan: Plan) -> Result<GenerateResponse, ApiError> {
        let res = self
            .client
            .get(self.url(&format!("/generate/{}", plan)))
            .send()
            .await
            .map_err(ApiError::Request)?;

        match res.status() {
            StatusCode::OK => res.json().await.map_err(ApiError::Request),
            StatusCode::BAD_REQUEST => {
                let body: ErrorBody = res.json().await.map_err(ApiError::Request)?;
                Err(ApiError::BadRequest(body.detail))
            }
            _ => Err(ApiError::Server(res.status().to_string())),
        }
    }
}
