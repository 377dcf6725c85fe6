//! Request and response bodies of the Food API.

use serde::{Deserialize, Serialize};

/// Confirmation or error body, `{"msg": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message.
    pub msg: String,
}

impl ApiMessage {
    /// Creates a new message body.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Body of `POST /api/User/Authentication`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Account name the token was issued for.
    pub username: String,
    /// Bearer token for subsequent requests.
    pub access_token: String,
}

/// Body of `POST /api/Food/Create`.
///
/// Accepts both the PascalCase and camelCase spellings of each field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFoodRequest {
    /// Food title.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    /// Review text.
    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,
    /// Optional picture URL.
    #[serde(rename = "Url", alias = "url", default)]
    pub url: Option<String>,
}

impl CreateFoodRequest {
    /// Returns the names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("Name");
        }
        if self.description.trim().is_empty() {
            missing.push("Description");
        }
        missing
    }
}

/// Successful create response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFoodResponse {
    /// Identifier assigned to the new food.
    pub food_id: String,
    /// Confirmation message.
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_both_spellings() {
        let pascal: CreateFoodRequest =
            serde_json::from_value(json!({"Name": "Soup", "Description": "Hot", "Url": ""}))
                .unwrap();
        assert_eq!(pascal.name, "Soup");
        assert_eq!(pascal.url.as_deref(), Some(""));

        let camel: CreateFoodRequest =
            serde_json::from_value(json!({"name": "Soup", "description": "Hot"})).unwrap();
        assert_eq!(camel.description, "Hot");
        assert!(camel.url.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let request: CreateFoodRequest =
            serde_json::from_value(json!({"Name": "", "Description": "  "})).unwrap();
        assert_eq!(request.missing_fields(), vec!["Name", "Description"]);

        let request: CreateFoodRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.missing_fields().len(), 2);
    }

    #[test]
    fn test_login_response_uses_camel_case() {
        let response = LoginResponse {
            username: "noraivo".to_string(),
            access_token: "token".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["accessToken"], "token");
    }
}
