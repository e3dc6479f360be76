//! License key issuance and verification for GEAR.
//!
//! Keys have the form `GEAR-<plan>-<issued_at>-<signature>`, where the
//! signature is a truncated HMAC-SHA256 tag over the first three fields.

pub mod issuer;
pub mod key;
pub mod secret;
pub mod signer;
pub mod types;
pub mod verifier;

pub use issuer::KeyIssuer;
pub use key::{LicenseKey, PRODUCT_PREFIX};
pub use secret::SharedSecret;
pub use signer::{KeySigner, SIGNATURE_LEN};
pub use types::{LIFETIME_HORIZON_SECS, MONTHLY_TERM_SECS, Rejection, Verification};
pub use verifier::{KeyVerifier, inspect};
