//! Application state shared across handlers.

use gear_licensing::{KeyIssuer, KeyVerifier, SharedSecret};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub issuer: KeyIssuer,
    pub verifier: KeyVerifier,
}

impl AppState {
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            issuer: KeyIssuer::new(secret.clone()),
            verifier: KeyVerifier::new(secret),
        }
    }
}
