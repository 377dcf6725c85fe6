//! Bearer token issuance and enforcement.
//!
//! Tokens are opaque strings handed out by the login endpoint. Every
//! `/api/Food/*` route runs behind [`require_bearer`].

use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StubError, StubResult};
use crate::state::AppState;
use crate::storage::FoodStorage;

/// Registry of tokens issued by this server instance.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: RwLock<HashMap<String, String>>,
}

impl TokenRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token for the given user.
    pub fn issue(&self, username: &str) -> String {
        let token = format!("stub.{}.{}", username, Uuid::new_v4().simple());
        self.tokens
            .write()
            .insert(token.clone(), username.to_string());
        token
    }

    /// Returns true if the token was issued by this registry.
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.read().contains_key(token)
    }

    /// Returns the user a token belongs to.
    pub fn owner(&self, token: &str) -> Option<String> {
        self.tokens.read().get(token).cloned()
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Middleware rejecting requests without a known bearer token.
///
/// Used with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer<S>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> StubResult<Response>
where
    S: FoodStorage + 'static,
{
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_bearer)
        .ok_or_else(|| StubError::Unauthorized {
            message: "Missing bearer token".to_string(),
        })?;

    let user = state
        .tokens()
        .owner(token)
        .ok_or_else(|| StubError::Unauthorized {
            message: "Invalid bearer token".to_string(),
        })?;
    debug!(user = %user, path = %request.uri().path(), "Authorized request");

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate() {
        let registry = TokenRegistry::new();
        let token = registry.issue("noraivo");
        assert!(registry.is_valid(&token));
        assert_eq!(registry.owner(&token).as_deref(), Some("noraivo"));
        assert!(!registry.is_valid("forged"));
    }

    #[test]
    fn test_tokens_are_unique() {
        let registry = TokenRegistry::new();
        assert_ne!(registry.issue("a"), registry.issue("a"));
    }

    #[test]
    fn test_parse_bearer() {
        assert_eq!(parse_bearer("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Bearer"), None);
    }
}
