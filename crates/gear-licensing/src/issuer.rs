//! License key issuance.

use crate::key::LicenseKey;
use crate::secret::SharedSecret;
use crate::signer::KeySigner;
use chrono::{DateTime, Utc};
use gear_core::{Plan, Result};
use tracing::info;

/// Issues signed license keys.
#[derive(Debug, Clone)]
pub struct KeyIssuer {
    signer: KeySigner,
}

impl KeyIssuer {
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            signer: KeySigner::new(secret),
        }
    }

    /// Issue a key for `plan`, stamped with the current time.
    pub fn issue(&self, plan: Plan) -> LicenseKey {
        self.issue_at(plan, Utc::now())
    }

    /// Issue a key for `plan`, stamped with `now`.
    pub fn issue_at(&self, plan: Plan, now: DateTime<Utc>) -> LicenseKey {
        let key = LicenseKey::signed(plan, now.timestamp(), |message| {
            self.signer.sign(message)
        });
        info!(plan = %plan, issued_at = key.issued_at(), "Issued license key");
        key
    }

    /// Issue a key for a plan given by its label (`monthly` or `lifetime`).
    pub fn issue_named(&self, plan: &str) -> Result<LicenseKey> {
        let plan: Plan = plan.parse()?;
        Ok(self.issue(plan))
    }
}
