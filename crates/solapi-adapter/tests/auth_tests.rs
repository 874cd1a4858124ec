/*
[INPUT]:  Fixed and random signing inputs
[OUTPUT]: Test results for request signing
[POS]:    Integration tests - authentication header
[UPDATE]: When signing algorithm or header format changes
*/

use reqwest::Method;
use rstest::rstest;
use solapi_adapter::auth::SALT_BYTES;
use solapi_adapter::{Authorization, ClientConfig, HmacSigner, RequestSigner, SolapiClient};
use tokio_test::assert_ok;

const FIXED_DATE: &str = "2026-10-18T09:30:00Z";
const FIXED_SALT: &str = "0123456789abcdef0123456789abcdef01234567";

#[rstest]
#[case("test-secret", "ab663c7a6ef7652f90e27e3f11f847c6d1e0377a40868c79d8335858c969f66c")]
#[case("", "fe7d9c951ab304f9ee4a4cb7a570edcf9381d8402b87c1b37f8ab2c2ef12ad86")]
fn test_reference_vectors(#[case] secret: &str, #[case] expected: &str) {
    let signer = RequestSigner::new("KEY", secret);
    let auth = signer.sign_request(FIXED_DATE, FIXED_SALT);
    assert_eq!(auth.signature, expected);

    let message = format!("{FIXED_DATE}{FIXED_SALT}");
    assert_eq!(HmacSigner::new(secret).sign_hex(message.as_bytes()), expected);
}

#[test]
fn test_signatures_differ_for_identical_secret() {
    let signer = RequestSigner::new("KEY", "same");
    let first = signer.authorization();
    let second = signer.authorization();
    assert_ne!(first.signature, second.signature);
    assert_ne!(first.salt, second.salt);
}

#[test]
fn test_fresh_header_shape() {
    let auth = RequestSigner::new("KEY", "secret").authorization();
    let header = auth.header_value();

    assert!(header.starts_with("HMAC-SHA256 apiKey=KEY, date="));
    assert_eq!(auth.salt.len(), SALT_BYTES * 2);
    assert_eq!(auth.signature.len(), 64);
    assert!(chrono::DateTime::parse_from_rfc3339(&auth.date).is_ok());
    assert_eq!(Authorization::parse(&header), Some(auth));
}

#[test]
fn test_unconfigured_client_still_signs() {
    let client = assert_ok!(SolapiClient::with_config(ClientConfig::default()));
    let signed = assert_ok!(client.signed_request(Method::GET, "cash/v1/balance"));

    assert_eq!(signed.authorization.api_key, "");
    assert_eq!(signed.authorization.signature.len(), 64);
    assert!(!signed.authorization.header_value().is_empty());
}

#[test]
fn test_signed_requests_are_never_reused() {
    let config = ClientConfig::default()
        .with_api_key("KEY")
        .with_api_secret("SECRET");
    let client = assert_ok!(SolapiClient::with_config(config));
    let verifier = RequestSigner::new("KEY", "SECRET");

    let first = assert_ok!(client.signed_request(Method::POST, "messages/v4/send"));
    let second = assert_ok!(client.signed_request(Method::POST, "messages/v4/send"));

    assert_ne!(first.authorization, second.authorization);
    assert!(verifier.verify(&first.authorization));
    assert!(verifier.verify(&second.authorization));
}
