//! Common test utilities for SDK integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use b2brilliant_sdk::{ApiClient, B2BrilliantAgent};
use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every test client.
pub const TEST_API_KEY: &str = "test-api-key";

/// A mock API server with an agent pointed at it.
pub struct TestHarness {
    /// The mock server receiving requests.
    pub server: MockServer,
    /// Agent configured against the mock server.
    pub agent: B2BrilliantAgent,
}

impl TestHarness {
    /// Start a fresh mock server and agent.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let agent = B2BrilliantAgent::with_base_url(TEST_API_KEY, Some(&server.uri()))
            .expect("Failed to create agent");
        Self { server, agent }
    }

    /// Fail the test if any request reaches the server.
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request the server has seen, in order.
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Request body is not JSON"))
            .collect()
    }
}

/// Transport pointed at `server`.
pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(TEST_API_KEY, server.uri()).expect("Failed to create client")
}

/// A single-URL list.
pub fn urls(url: &str) -> Vec<String> {
    vec![url.to_string()]
}

/// Minimal business data accepted by the validators.
pub fn business(name: &str) -> Value {
    json!({"name": name, "industry": "Tech"})
}
