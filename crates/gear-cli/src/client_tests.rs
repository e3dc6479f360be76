use crate::client::{ApiError, LicenseClient};
use gear_api::{AppState, build_app};
use gear_core::Plan;
use gear_licensing::SharedSecret;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn start_server() -> SocketAddr {
    let secret = SharedSecret::new("client-test-secret").unwrap();
    let app = build_app(Arc::new(AppState::new(secret)));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_generate_and_verify_remotely() {
    let addr = start_server().await;
    let client = LicenseClient::new(&format!("http://{}/", addr));

    let generated = client.generate(Plan::Lifetime).await.unwrap();
    assert_eq!(generated.plan, Plan::Lifetime);
    assert!(generated.license_key.starts_with("GEAR-L-"));

    let verified = client.verify(&generated.license_key).await.unwrap();
    assert!(verified.valid);
    assert_eq!(verified.plan, Some(Plan::Lifetime));
}

#[tokio::test]
async fn test_verify_remotely_reports_rejection() {
    let addr = start_server().await;
    let client = LicenseClient::new(&format!("http://{}", addr));

    let verified = client.verify("GEAR-M-1700000000-0000000000").await.unwrap();
    assert!(!verified.valid);
    assert_eq!(
        verified.message.as_deref(),
        Some("Invalid license signature")
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    let client = LicenseClient::new("http://127.0.0.1:1");
    let err = client.verify("GEAR-M-1-0").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
