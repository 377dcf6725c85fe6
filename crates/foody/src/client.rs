//! HTTP client wrapper.
//!
//! [`ApiClient`] resolves paths against a fixed base URL and, once a token has
//! been attached, sends it as `Authorization: Bearer <token>` on every call.
//! Responses are read fully into an [`ApiResponse`] so assertions can inspect
//! the status and the raw body.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Creates a response from its parts.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the raw body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> SuiteResult<T> {
        serde_json::from_str(&self.body).map_err(|e| SuiteError::InvalidResponse {
            message: format!("{} (body: {})", e, preview(&self.body)),
        })
    }
}

/// Client for the Food service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates an unauthenticated client.
    pub fn new(base_url: Url, timeout: Duration) -> SuiteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuiteError::setup(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Creates an unauthenticated client from the suite configuration.
    pub fn from_config(config: &SuiteConfig) -> SuiteResult<Self> {
        Self::new(config.parsed_base_url()?, config.timeout())
    }

    /// Returns a client that presents the given bearer token on every call.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the attached bearer token, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolves a path against the base URL, keeping any base path prefix.
    pub fn url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }

    /// Sends a GET request.
    pub async fn get(&self, path: &str) -> SuiteResult<ApiResponse> {
        self.execute(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    /// Sends a POST request with a JSON body.
    pub async fn post_json<T>(&self, path: &str, body: &T) -> SuiteResult<ApiResponse>
    where
        T: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(Method::POST, path, builder).await
    }

    /// Sends a PATCH request with a JSON body.
    pub async fn patch_json<T>(&self, path: &str, body: &T) -> SuiteResult<ApiResponse>
    where
        T: Serialize + ?Sized,
    {
        let builder = self.request(Method::PATCH, path).json(body);
        self.execute(Method::PATCH, path, builder).await
    }

    /// Sends a DELETE request.
    pub async fn delete(&self, path: &str) -> SuiteResult<ApiResponse> {
        self.execute(Method::DELETE, path, self.request(Method::DELETE, path))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> SuiteResult<ApiResponse> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            body = %preview(&body),
            "HTTP exchange"
        );

        Ok(ApiResponse { status, body })
    }
}

/// Shortens a body for log and error messages.
fn preview(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
