//! Configuration for the stub Food service.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FOODY_STUB_PORT` | 8086 | Server port |
//! | `FOODY_STUB_HOST` | 127.0.0.1 | Host to bind |
//! | `FOODY_STUB_LOG_LEVEL` | info | Log level |
//! | `FOODY_STUB_USERNAME` | noraivo | Accepted login username |
//! | `FOODY_STUB_PASSWORD` | ivo1ivo1 | Accepted login password |
//! | `FOODY_STUB_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |

use clap::Parser;

/// Configuration for the stub Food service.
#[derive(Debug, Clone, Parser)]
#[command(name = "foody-stub")]
#[command(about = "Stub implementation of the Food review API")]
pub struct StubConfig {
    /// Port to listen on.
    #[arg(short, long, env = "FOODY_STUB_PORT", default_value = "8086")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "FOODY_STUB_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FOODY_STUB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Username accepted by the authentication endpoint.
    #[arg(long, env = "FOODY_STUB_USERNAME", default_value = "noraivo")]
    pub username: String,

    /// Password accepted by the authentication endpoint.
    #[arg(long, env = "FOODY_STUB_PASSWORD", default_value = "ivo1ivo1")]
    pub password: String,

    /// Request timeout in seconds.
    #[arg(long, env = "FOODY_STUB_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            port: 8086,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            username: "noraivo".to_string(),
            password: "ivo1ivo1".to_string(),
            request_timeout: 30,
        }
    }
}

impl StubConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.username.is_empty() {
            errors.push("Username cannot be empty".to_string());
        }

        if self.password.is_empty() {
            errors.push("Password cannot be empty".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Binds to an ephemeral port on loopback.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            ..Self::default()
        }
    }
}
