/*
[INPUT]:  API secret bytes and message bytes
[OUTPUT]: Hex-encoded HMAC-SHA256 signatures, random salts, RFC 3339 timestamps
[POS]:    Auth layer - cryptographic primitives for request authentication
[UPDATE]: When changing signing algorithm, salt size, or timestamp format
*/

use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes in a salt (hex-encoded to twice as many chars)
pub const SALT_BYTES: usize = 20;

/// HMAC-SHA256 signer keyed by the API secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

impl HmacSigner {
    /// Create signer from the API secret (an empty secret is accepted)
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Sign a message and return the lowercase hex digest
    pub fn sign_hex(&self, message: &[u8]) -> String {
        let mut mac = self.mac();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a hex digest against a message
    pub fn verify_hex(&self, message: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac();
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC pads or hashes the key, so every key length is valid
        <HmacSha256 as Mac>::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length")
    }
}

/// Generate a fresh hex-encoded salt from the OS RNG
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Format a timestamp the way the Authorization header expects it
pub fn format_date(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
