/*
[INPUT]:  API key, HMAC signer, timestamp and salt
[OUTPUT]: Authorization header value (HMAC-SHA256 scheme)
[POS]:    HTTP layer - request signing for every outbound call
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use chrono::Utc;

use crate::auth::{HmacSigner, format_date, generate_salt};

/// Scheme name at the start of the Authorization header
pub const AUTH_SCHEME: &str = "HMAC-SHA256";

/// Parsed or freshly built Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    pub api_key: String,
    pub date: String,
    pub salt: String,
    pub signature: String,
}

impl Authorization {
    /// Render as `HMAC-SHA256 apiKey=.., date=.., salt=.., signature=..`
    pub fn header_value(&self) -> String {
        self.to_string()
    }

    /// Parse a header value produced by [`Authorization::header_value`]
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.strip_prefix(AUTH_SCHEME)?.strip_prefix(' ')?;
        let mut api_key = None;
        let mut date = None;
        let mut salt = None;
        let mut signature = None;
        for pair in rest.split(", ") {
            let (key, val) = pair.split_once('=')?;
            let slot = match key {
                "apiKey" => &mut api_key,
                "date" => &mut date,
                "salt" => &mut salt,
                "signature" => &mut signature,
                _ => return None,
            };
            *slot = Some(val.to_string());
        }
        Some(Self {
            api_key: api_key?,
            date: date?,
            salt: salt?,
            signature: signature?,
        })
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{AUTH_SCHEME} apiKey={}, date={}, salt={}, signature={}",
            self.api_key, self.date, self.salt, self.signature
        )
    }
}

/// Signs outbound requests with the configured API key and secret
#[derive(Debug, Clone)]
pub struct RequestSigner {
    api_key: String,
    signer: HmacSigner,
}

impl RequestSigner {
    /// Create a new request signer from API credentials
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<[u8]>) -> Self {
        Self {
            api_key: api_key.into(),
            signer: HmacSigner::new(api_secret),
        }
    }

    /// Sign with a fixed date and salt
    ///
    /// Message: "{date}{salt}" (no separator)
    pub fn sign_request(&self, date: &str, salt: &str) -> Authorization {
        let message = format!("{date}{salt}");
        Authorization {
            api_key: self.api_key.clone(),
            date: date.to_string(),
            salt: salt.to_string(),
            signature: self.signer.sign_hex(message.as_bytes()),
        }
    }

    /// Sign with the current time and a fresh salt
    pub fn authorization(&self) -> Authorization {
        let date = format_date(Utc::now());
        let salt = generate_salt();
        self.sign_request(&date, &salt)
    }

    /// Check a received header against this signer's secret
    pub fn verify(&self, authorization: &Authorization) -> bool {
        let message = format!("{}{}", authorization.date, authorization.salt);
        let signature = &authorization.signature;
        authorization.api_key == self.api_key
            && self.signer.verify_hex(message.as_bytes(), signature)
    }
}
