//! Integration test infrastructure for the GEAR license service.
//!
//! Starts the real API router on an ephemeral port and talks to it over
//! HTTP.
//!
//! # Usage
//!
//! ```ignore
//! use gear_tests::{ApiTestClient, start_test_server, test_secret};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (addr, _handle) = start_test_server(test_secret()).await.unwrap();
//!     let client = ApiTestClient::new(addr);
//! }
//! ```

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

/// Initialize test logging (call once per test binary).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,gear_licensing=debug")),
        )
        .with_test_writer()
        .try_init();
}
