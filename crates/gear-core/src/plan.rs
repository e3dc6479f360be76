//! License plans.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Purchased entitlement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Time-limited, valid for 30 days from issuance.
    Monthly,
    /// Effectively unlimited.
    Lifetime,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Monthly, Plan::Lifetime];

    /// Single-letter code used inside license keys.
    pub fn code(self) -> char {
        match self {
            Plan::Monthly => 'M',
            Plan::Lifetime => 'L',
        }
    }

    /// Resolve a key's plan code. Unknown codes yield `None`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Plan::Monthly),
            'L' => Some(Plan::Lifetime),
            _ => None,
        }
    }

    /// Human-readable label, as exposed over the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Monthly => "monthly",
            Plan::Lifetime => "lifetime",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Plan::Monthly),
            "lifetime" => Ok(Plan::Lifetime),
            other => Err(Error::InvalidPlan(other.to_string())),
        }
    }
}
