//! Shared test helpers for license client tests.

#![allow(dead_code)]

use lemon_license::LicenseClient;
use wiremock::MockServer;

/// Builds a client pointed at a mock server, debug enabled.
pub fn client_for(server: &MockServer) -> LicenseClient {
    LicenseClient::builder()
        .base_url(server.uri())
        .debug(true)
        .build()
}

/// Builds a client pointed at an address nothing listens on.
pub async fn unreachable_client() -> LicenseClient {
    // Grab a free port by starting a server, then drop it.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    LicenseClient::builder().base_url(uri).build()
}
