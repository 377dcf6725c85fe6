//! Error types for the suite.
//!
//! Errors fall in three groups:
//!
//! | Group | Variants | Effect |
//! |-------|----------|--------|
//! | setup | `Setup`, `InvalidUrl`, `Config` | aborts the run |
//! | assertion | `Assertion`, `MissingFoodHandle` | fails one scenario |
//! | transport | `Transport`, `InvalidResponse` | fails one scenario |

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use thiserror::Error;

/// The primary error type of the suite.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Authentication bootstrap failed; no scenario can run.
    #[error("setup failed: {message}")]
    Setup { message: String },

    /// The base URL or a path could not be turned into a request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configuration was rejected.
    #[error("invalid configuration: {}", .0.join("; "))]
    Config(Vec<String>),

    /// An expectation on a response did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// A scenario that needs the created food ran without one.
    #[error("no food id available: {reason}")]
    MissingFoodHandle { reason: String },

    /// The HTTP exchange itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body could not be interpreted.
    #[error("invalid response body: {message}")]
    InvalidResponse { message: String },
}

impl SuiteError {
    /// Returns true when the error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SuiteError::Setup { .. } | SuiteError::InvalidUrl(_) | SuiteError::Config(_)
        )
    }

    /// Builds a setup error.
    pub fn setup(message: impl Into<String>) -> Self {
        SuiteError::Setup {
            message: message.into(),
        }
    }
}

/// Result type for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;

/// A failed expectation, carrying the literal description of the check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}: expected {expected}, got {actual}")]
pub struct AssertionFailure {
    pub description: String,
    pub expected: String,
    pub actual: String,
}

impl AssertionFailure {
    /// Creates a new assertion failure.
    pub fn new(
        description: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self {
            description: description.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
