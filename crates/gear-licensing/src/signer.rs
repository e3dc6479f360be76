//! HMAC-SHA256 signing of license key messages.

use crate::secret::SharedSecret;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Number of hex characters kept from the full tag.
///
/// Ten characters (40 bits) is far shorter than the 64 the full tag
/// provides. Keys already in customers' hands carry this length, so
/// changing it requires a key migration.
pub const SIGNATURE_LEN: usize = 10;

/// Computes and checks truncated key signatures.
#[derive(Debug, Clone)]
pub struct KeySigner {
    secret: SharedSecret,
}

impl KeySigner {
    pub fn new(secret: SharedSecret) -> Self {
        Self { secret }
    }

    /// Sign a message, returning the lowercase hex tag truncated to
    /// [`SIGNATURE_LEN`] characters.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        let tag = mac.finalize().into_bytes();
        hex::encode(&tag[..SIGNATURE_LEN / 2])
    }

    /// Check a supplied signature against the expected one in constant time.
    pub fn verify(&self, message: &str, signature: &str) -> bool {
        let expected = self.sign(message);
        expected.as_bytes().ct_eq(signature.as_bytes()).into()
    }
}
