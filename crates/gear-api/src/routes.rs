//! API route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, licenses};
use crate::middleware::{cors_layer, request_id};
use crate::state::AppState;

/// Create the main API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .merge(license_routes())
        .layer(middleware::from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn license_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/verify", post(licenses::verify_license))
        .route("/generate/{license_type}", get(licenses::generate_license))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use gear_licensing::SharedSecret;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let secret = SharedSecret::new("router-secret").unwrap();
        create_router(Arc::new(AppState::new(secret)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_identity() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(
            body_json(response).await,
            json!({ "status": "ok", "service": health::SERVICE_NAME })
        );
    }

    #[tokio::test]
    async fn test_generate_then_verify() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::get("/generate/monthly")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let generated = body_json(response).await;
        assert_eq!(generated["type"], "monthly");
        let key = generated["license_key"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::post("/verify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "licenseKey": key }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let verified = body_json(response).await;
        assert_eq!(verified["valid"], true);
        assert_eq!(verified["message"], "License is valid");
        assert_eq!(verified["type"], "monthly");
        assert!(verified["validUntil"].is_i64());
    }

    #[tokio::test]
    async fn test_generate_unknown_type() {
        let response = app()
            .oneshot(Request::get("/generate/weekly").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "License type must be 'monthly' or 'lifetime'" })
        );
    }

    #[tokio::test]
    async fn test_verify_invalid_key_is_ok_status() {
        let response = app()
            .oneshot(
                Request::post("/verify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"licenseKey":"TEST-ABCD-EFGH-1234"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "valid": false,
                "message": "Invalid license key format",
                "validUntil": null,
                "type": null,
            })
        );
    }

    #[tokio::test]
    async fn test_verify_missing_field() {
        let response = app()
            .oneshot(
                Request::post("/verify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
