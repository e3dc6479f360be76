//! Test fixtures for building license keys.

use chrono::Utc;
use gear_core::Plan;
use gear_licensing::{KeyIssuer, KeySigner, MONTHLY_TERM_SECS, SharedSecret};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_secret() -> SharedSecret {
    SharedSecret::new(TEST_SECRET).expect("test secret is not empty")
}

/// Factory for license keys signed with [`TEST_SECRET`].
pub struct KeyFixture;

impl KeyFixture {
    /// Key issued now.
    pub fn fresh(plan: Plan) -> String {
        KeyIssuer::new(test_secret()).issue(plan).to_string()
    }

    /// Key issued `secs_ago` seconds in the past.
    pub fn issued_ago(plan: Plan, secs_ago: i64) -> String {
        let issued_at = Utc::now().timestamp() - secs_ago;
        Self::signed(&format!("GEAR-{}-{}", plan.code(), issued_at))
    }

    /// Monthly key one hour past its term.
    pub fn expired_monthly() -> String {
        Self::issued_ago(Plan::Monthly, MONTHLY_TERM_SECS + 3600)
    }

    /// Correctly signed key with an arbitrary message.
    pub fn signed(message: &str) -> String {
        let signature = KeySigner::new(test_secret()).sign(message);
        format!("{}-{}", message, signature)
    }

    /// Valid key with its last signature character changed.
    pub fn tampered(plan: Plan) -> String {
        let mut key = Self::fresh(plan);
        let last = key.pop().expect("key is not empty");
        key.push(if last == '0' { '1' } else { '0' });
        key
    }
}
