//! License key verification.

use crate::key::LicenseKey;
use crate::secret::SharedSecret;
use crate::signer::KeySigner;
use crate::types::{LIFETIME_HORIZON_SECS, MONTHLY_TERM_SECS, Rejection, Verification};
use chrono::{DateTime, Utc};
use gear_core::Plan;
use tracing::{debug, info, warn};

/// Verifies license keys against the shared secret.
#[derive(Debug, Clone)]
pub struct KeyVerifier {
    signer: KeySigner,
}

impl KeyVerifier {
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            signer: KeySigner::new(secret),
        }
    }

    /// Verify a key as of now.
    pub fn verify(&self, key: &str) -> Verification {
        self.verify_at(key, Utc::now())
    }

    /// Verify a key as of `now`. Never fails: every rejection is reported
    /// in the returned [`Verification`].
    pub fn verify_at(&self, key: &str, now: DateTime<Utc>) -> Verification {
        match self.check(key, now) {
            Ok(result) => {
                info!(key_prefix = key_prefix(key), plan = ?result.plan, "License validated");
                result
            }
            Err(rejection) => {
                match rejection {
                    Rejection::Signature => {
                        warn!(key_prefix = key_prefix(key), "License signature verification failed")
                    }
                    _ => debug!(key_prefix = key_prefix(key), reason = %rejection, "License rejected"),
                }
                Verification::rejected(rejection)
            }
        }
    }

    fn check(&self, key: &str, now: DateTime<Utc>) -> Result<Verification, Rejection> {
        let key = LicenseKey::parse(key)?;

        if !self.signer.verify(key.message(), key.signature()) {
            return Err(Rejection::Signature);
        }

        let now = now.timestamp();
        match key.plan() {
            Some(Plan::Lifetime) => Ok(Verification::success(
                Plan::Lifetime,
                now.saturating_add(LIFETIME_HORIZON_SECS),
            )),
            Some(Plan::Monthly) => {
                let valid_until = key.issued_at().saturating_add(MONTHLY_TERM_SECS);
                if now > valid_until {
                    return Err(Rejection::Expired);
                }
                Ok(Verification::success(Plan::Monthly, valid_until))
            }
            None => Err(Rejection::UnknownPlan),
        }
    }
}

/// Parse a key without checking its signature or expiry.
pub fn inspect(key: &str) -> Result<LicenseKey, Rejection> {
    LicenseKey::parse(key)
}

fn key_prefix(key: &str) -> &str {
    key.char_indices().nth(8).map_or(key, |(i, _)| &key[..i])
}
