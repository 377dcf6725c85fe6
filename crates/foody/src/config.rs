//! Suite configuration.
//!
//! Every value can be given on the command line or through the environment.
//! The defaults target the shared QA deployment of the Food service.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FOODY_BASE_URL` | `http://softuni-qa-loadbalancer-2137572849.eu-north-1.elb.amazonaws.com:86` | Service base URL |
//! | `FOODY_USERNAME` | noraivo | Login username |
//! | `FOODY_PASSWORD` | ivo1ivo1 | Login password |
//! | `FOODY_REQUEST_TIMEOUT` | 30 | Per-request timeout (seconds) |
//! | `FOODY_MISSING_FOOD_ID` | 1234567890 | Id assumed not to exist on the server |
//! | `FOODY_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use foody::SuiteConfig;
//!
//! let config = SuiteConfig {
//!     base_url: "http://127.0.0.1:8086".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::ffi::OsString;
use std::time::Duration;

use clap::{Args, Parser};
use url::Url;

use crate::error::{SuiteError, SuiteResult};

/// Base URL of the shared QA deployment.
pub const DEFAULT_BASE_URL: &str =
    "http://softuni-qa-loadbalancer-2137572849.eu-north-1.elb.amazonaws.com:86";

/// Configuration for a suite run.
#[derive(Debug, Clone, Args)]
pub struct SuiteConfig {
    /// Base URL of the Food service.
    #[arg(long, env = "FOODY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Username used to obtain the access token.
    #[arg(long, env = "FOODY_USERNAME", default_value = "noraivo")]
    pub username: String,

    /// Password used to obtain the access token.
    #[arg(long, env = "FOODY_PASSWORD", default_value = "ivo1ivo1", hide_env_values = true)]
    pub password: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "FOODY_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Food id the negative scenarios assume does not exist.
    #[arg(long, env = "FOODY_MISSING_FOOD_ID", default_value = "1234567890")]
    pub missing_food_id: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FOODY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: "noraivo".to_string(),
            password: "ivo1ivo1".to_string(),
            request_timeout: 30,
            missing_food_id: "1234567890".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Parser)]
struct EnvOnly {
    #[command(flatten)]
    config: SuiteConfig,
}

impl SuiteConfig {
    /// Builds the configuration from environment variables alone.
    ///
    /// A variable that cannot be parsed is a [`SuiteError::Config`]; no field
    /// falls back to its default because another one is malformed.
    pub fn from_env() -> SuiteResult<Self> {
        Self::try_parse_args(["foody"])
    }

    fn try_parse_args<I, T>(args: I) -> SuiteResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        EnvOnly::try_parse_from(args)
            .map(|parsed| parsed.config)
            .map_err(|e| {
                let rendered = e.to_string();
                let message = rendered.lines().next().unwrap_or_default();
                SuiteError::Config(vec![message.trim_start_matches("error: ").to_string()])
            })
    }

    /// Returns the request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Parses the base URL.
    pub fn parsed_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match self.parsed_base_url() {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("Unsupported base URL scheme: {}", url.scheme())),
            Err(e) => errors.push(format!("Invalid base URL {}: {}", self.base_url, e)),
        }

        if self.username.is_empty() {
            errors.push("Username cannot be empty".to_string());
        }

        if self.password.is_empty() {
            errors.push("Password cannot be empty".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.missing_food_id.trim().is_empty() {
            errors.push("Missing food id cannot be empty".to_string());
        } else if self.missing_food_id.contains(['/', '?', '#']) {
            errors.push(format!(
                "Missing food id must be a single path segment: {}",
                self.missing_food_id
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing against a local server.
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: 5,
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }
}
