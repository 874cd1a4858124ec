/*
[INPUT]:  API secret and per-request salt/timestamp material
[OUTPUT]: HMAC-SHA256 signatures and signing inputs
[POS]:    Auth layer - handles SOLAPI request authentication
[UPDATE]: When auth scheme or signature inputs change
*/

pub mod signer;

pub use signer::{HmacSigner, SALT_BYTES, format_date, generate_salt};
