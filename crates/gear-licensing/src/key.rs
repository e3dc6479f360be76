//! License key format.
//!
//! ```text
//! GEAR-M-1700000000-3f9a0c12be
//! ^    ^ ^          ^
//! |    | |          signature: first 10 hex chars of HMAC-SHA256(message)
//! |    | issued_at: Unix seconds
//! |    plan code: M (monthly) or L (lifetime)
//! product prefix
//! ```
//!
//! The signed message is the first three fields joined with `-`, exactly as
//! they appear in the key.

use crate::types::Rejection;
use chrono::{DateTime, Utc};
use gear_core::Plan;
use std::fmt;
use std::str::FromStr;

/// Fixed prefix identifying the product family.
pub const PRODUCT_PREFIX: &str = "GEAR";

const FIELD_SEPARATOR: char = '-';

/// A license key split into its fields.
///
/// Parsing checks shape only. The plan code is kept as written so that
/// unknown codes can still be told apart from forged signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseKey {
    message: String,
    plan_code: String,
    issued_at: i64,
    signature: String,
}

impl LicenseKey {
    /// Build a key from a plan and issue time, signing with `sign`.
    pub(crate) fn signed(plan: Plan, issued_at: i64, sign: impl FnOnce(&str) -> String) -> Self {
        let plan_code = plan.code().to_string();
        let message = format!("{PRODUCT_PREFIX}{FIELD_SEPARATOR}{plan_code}{FIELD_SEPARATOR}{issued_at}");
        let signature = sign(&message);
        Self {
            message,
            plan_code,
            issued_at,
            signature,
        }
    }

    /// Split a key string and parse its fields.
    pub fn parse(key: &str) -> Result<Self, Rejection> {
        let parts: Vec<&str> = key.split(FIELD_SEPARATOR).collect();
        let [prefix, plan_code, issued_at, signature] = parts[..] else {
            return Err(Rejection::Format);
        };
        if prefix != PRODUCT_PREFIX {
            return Err(Rejection::Format);
        }

        let issued_at = issued_at
            .parse::<i64>()
            .map_err(|e| Rejection::Parse(e.to_string()))?;

        let message_len = key.len() - signature.len() - 1;
        Ok(Self {
            message: key[..message_len].to_string(),
            plan_code: plan_code.to_string(),
            issued_at,
            signature: signature.to_string(),
        })
    }

    /// The signed portion: `prefix-plan_code-issued_at`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Plan code as written in the key.
    pub fn plan_code(&self) -> &str {
        &self.plan_code
    }

    /// Resolve the plan code; `None` for unrecognized codes.
    pub fn plan(&self) -> Option<Plan> {
        let mut chars = self.plan_code.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Plan::from_code(code),
            _ => None,
        }
    }

    /// Issue time in Unix seconds.
    pub fn issued_at(&self) -> i64 {
        self.issued_at
    }

    pub fn issued_at_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.issued_at, 0)
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl FromStr for LicenseKey {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.message, FIELD_SEPARATOR, self.signature)
    }
}
