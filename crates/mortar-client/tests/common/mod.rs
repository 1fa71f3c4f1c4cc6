//! Shared wiremock harness for the client tests.

#![allow(dead_code)]

use std::time::Duration;

use mortar_client::ContentClient;
use mortar_core::endpoint::{Endpoint, Environment};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Endpoint whose API base is `<server>/api` and asset root is `<server>`.
pub fn endpoint_for(server: &MockServer) -> Endpoint {
    Endpoint {
        environment: Environment::Local,
        api_base: format!("{}/api", server.uri()),
        asset_root: server.uri(),
    }
}

/// Client against `server` with a short timeout.
pub fn client_for(server: &MockServer) -> ContentClient {
    client_with_timeout(server, Duration::from_secs(2))
}

/// Client against `server` with an explicit timeout.
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> ContentClient {
    ContentClient::new(endpoint_for(server), timeout).unwrap()
}

/// Serve `body` as JSON for `GET /api<resource>`.
pub async fn mount_get(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer `GET /api<resource>` with a bare status code.
pub async fn mount_status(server: &MockServer, resource: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api{resource}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
