//! Request and response bodies exchanged with the Food service.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account name.
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Login response body.
///
/// Only the token is read; an absent or null token becomes an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent calls.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// Returns the token, or `""` when the server sent none.
    pub fn into_token(self) -> String {
        self.access_token.unwrap_or_default()
    }
}

/// Body of a create request.
///
/// Field names are PascalCase on the wire. `Url` is left out entirely when
/// `None`, which is how the missing-fields scenario builds its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FoodInput {
    /// Food title.
    pub name: String,
    /// Review text.
    pub description: String,
    /// Optional picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FoodInput {
    /// The food created by the create scenario.
    pub fn sample() -> Self {
        Self {
            name: "New food".to_string(),
            description: "Test description".to_string(),
            url: Some(String::new()),
        }
    }

    /// A food with both required fields blank and no URL.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            url: None,
        }
    }
}

/// A single JSON-Patch-style operation, `{path, op, value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperation {
    /// JSON pointer of the field to change.
    pub path: String,
    /// Operation name, e.g. `replace`.
    pub op: String,
    /// New value.
    pub value: String,
}

impl PatchOperation {
    /// Builds a `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            op: "replace".to_string(),
            value: value.into(),
        }
    }
}

/// Patch document renaming a food.
pub fn rename_patch(name: &str) -> Vec<PatchOperation> {
    vec![PatchOperation::replace("/name", name)]
}

/// Create response body. Only the id is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFood {
    /// Identifier of the new food.
    #[serde(default)]
    pub food_id: Option<String>,
}

/// Identifier of the food created during a run.
///
/// Returned by the create scenario and passed by reference to the scenarios
/// that edit and delete it. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodHandle(String);

impl FoodHandle {
    /// Wraps an id, rejecting blank ones.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FoodHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
