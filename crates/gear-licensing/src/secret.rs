//! Shared signing secret.

use gear_core::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Symmetric secret used for both issuing and verifying keys.
///
/// Anyone holding it can forge arbitrary keys, so it never shows up in
/// `Debug` output or logs.
#[derive(Clone)]
pub struct SharedSecret(Arc<[u8]>);

impl SharedSecret {
    /// Wrap a secret value. Empty secrets are rejected.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = secret.as_ref();
        if bytes.is_empty() {
            return Err(Error::Config("license secret must not be empty".to_string()));
        }
        Ok(Self(Arc::from(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSecret").field(&"[REDACTED]").finish()
    }
}
