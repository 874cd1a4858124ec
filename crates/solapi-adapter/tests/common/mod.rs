/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for solapi-adapter tests

use solapi_adapter::{ClientConfig, SolapiClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "NCSTESTKEY";
pub const TEST_API_SECRET: &str = "TESTSECRETTESTSECRET";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at the mock server with test credentials
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_protocol("http")
        .with_domain(server.address().to_string())
        .with_api_key(TEST_API_KEY)
        .with_api_secret(TEST_API_SECRET)
}

/// Client pointing at the mock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> SolapiClient {
    let config = mock_config(server);
    SolapiClient::with_config(config).expect("client init")
}
