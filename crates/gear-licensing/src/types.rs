//! Verification outcomes.

use gear_core::Plan;
use thiserror::Error;

/// Validity window of a monthly key, counted from issuance.
pub const MONTHLY_TERM_SECS: i64 = 30 * 24 * 60 * 60;

/// Horizon reported for lifetime keys, counted from the time of verification.
pub const LIFETIME_HORIZON_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Reason a key failed verification.
///
/// The `Display` text is the reason string reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Wrong field count or product prefix.
    #[error("Invalid license key format")]
    Format,

    /// A field had the right position but could not be parsed.
    #[error("Error verifying license: {0}")]
    Parse(String),

    #[error("Invalid license signature")]
    Signature,

    #[error("License has expired")]
    Expired,

    #[error("Unknown license type")]
    UnknownPlan,
}

/// License verification result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Whether the key is valid.
    pub valid: bool,
    /// Human-readable reason.
    pub reason: String,
    /// End of validity in Unix milliseconds (valid keys only).
    pub valid_until: Option<i64>,
    /// The key's plan (valid keys only).
    pub plan: Option<Plan>,
    /// Failure kind (invalid keys only).
    pub rejection: Option<Rejection>,
}

impl Verification {
    /// A valid key; `valid_until_secs` is converted to milliseconds.
    pub fn success(plan: Plan, valid_until_secs: i64) -> Self {
        Self {
            valid: true,
            reason: "License is valid".to_string(),
            valid_until: Some(valid_until_secs.saturating_mul(1000)),
            plan: Some(plan),
            rejection: None,
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            valid: false,
            reason: rejection.to_string(),
            valid_until: None,
            plan: None,
            rejection: Some(rejection),
        }
    }
}

impl From<Rejection> for Verification {
    fn from(rejection: Rejection) -> Self {
        Self::rejected(rejection)
    }
}
