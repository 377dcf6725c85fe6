//! Common test utilities for running the suite against the local stub.

#![allow(dead_code)]

pub mod http;

use std::time::Duration;

use foody::{ApiClient, Session, SuiteConfig};
use foody_stub::{StubConfig, StubServer};
use url::Url;

/// A stub server together with a suite configuration pointing at it.
pub struct SuiteHarness {
    /// The running stub.
    pub server: StubServer,
    /// Suite configuration targeting the stub.
    pub config: SuiteConfig,
}

impl SuiteHarness {
    /// Starts a stub on an ephemeral port.
    pub async fn start() -> Self {
        let server = StubServer::start(StubConfig::for_testing())
            .await
            .expect("Failed to start stub server");
        let config = SuiteConfig::for_testing(server.base_url());
        Self { server, config }
    }

    /// Logs in with the configured credentials.
    pub async fn session(&self) -> Session {
        Session::bootstrap(&self.config)
            .await
            .expect("Failed to bootstrap session")
    }

    /// Returns a session whose token the stub does not recognise.
    pub fn session_with_token(&self, token: &str) -> Session {
        let url = Url::parse(&self.server.base_url()).expect("valid base URL");
        let client = ApiClient::new(url, Duration::from_secs(5))
            .expect("Failed to build client")
            .with_bearer_token(token);
        Session::from_client(client)
    }
}
