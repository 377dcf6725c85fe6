//! Authentication bootstrap.
//!
//! A [`Session`] is built once per run: it logs in, then keeps a client that
//! presents the access token on every later request. Any failure here is a
//! setup failure and aborts the run.

use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::paths;

/// Logs in and returns the access token.
///
/// An absent or null `accessToken` yields an empty string. A transport error,
/// a non-2xx status or a body that is not a JSON object is a setup failure.
pub async fn fetch_token(client: &ApiClient, username: &str, password: &str) -> SuiteResult<String> {
    debug!(username = %username, "Requesting access token");

    let response = client
        .post_json(paths::AUTHENTICATION, &LoginRequest { username, password })
        .await
        .map_err(|e| SuiteError::setup(format!("login request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(SuiteError::setup(format!(
            "login returned {}: {}",
            response.status(),
            response.body()
        )));
    }

    let login: LoginResponse = response
        .json()
        .map_err(|e| SuiteError::setup(format!("login response is not usable: {}", e)))?;

    Ok(login.into_token())
}

/// An authenticated connection to the Food service.
///
/// Read-only once bootstrapped; [`Session::close`] releases it.
#[derive(Debug)]
pub struct Session {
    client: ApiClient,
}

impl Session {
    /// Validates the configuration, logs in and attaches the token.
    pub async fn bootstrap(config: &SuiteConfig) -> SuiteResult<Self> {
        config.validate().map_err(SuiteError::Config)?;

        let login_client = ApiClient::from_config(config)?;
        let token = fetch_token(&login_client, &config.username, &config.password).await?;
        if token.is_empty() {
            warn!(username = %config.username, "Login response carried no access token");
        }

        info!(base_url = %config.base_url, username = %config.username, "Session established");

        Ok(Self {
            client: login_client.with_bearer_token(token),
        })
    }

    /// Wraps an already authenticated client.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns the authenticated client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Releases the session.
    pub fn close(self) {
        info!(base_url = %self.client.base_url(), "Session closed");
    }
}
