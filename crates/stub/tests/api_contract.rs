//! HTTP contract tests for the Food API stub.
//!
//! Covers the status codes and bodies the suite relies on:
//! - 200 / 401 / 400 on login
//! - 201 / 400 on create
//! - 200 / 404 / 400 on edit
//! - 200 on list
//! - 200 / 400 on delete

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use foody_stub::{FoodStorage, InMemoryFoodStorage, StubConfig, create_app_with_storage};
use serde_json::{Value, json};

/// Creates a test server together with a handle on its store.
fn create_test_server() -> (TestServer, Arc<InMemoryFoodStorage>) {
    let storage = Arc::new(InMemoryFoodStorage::new());
    let app = create_app_with_storage(Arc::clone(&storage), StubConfig::for_testing());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, storage)
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}

/// Logs in with the default credentials and returns the token.
async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/User/Authentication")
        .json(&json!({"username": "noraivo", "password": "ivo1ivo1"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["accessToken"]
        .as_str()
        .expect("accessToken should be a string")
        .to_string()
}

/// Creates a food and returns its id.
async fn create_food(server: &TestServer, token: &str, name: &str) -> String {
    let response = server
        .post("/api/Food/Create")
        .add_header(AUTHORIZATION, bearer(token))
        .json(&json!({"Name": name, "Description": "Test description", "Url": ""}))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    body["foodId"].as_str().unwrap().to_string()
}

fn rename_patch(value: &str) -> Value {
    json!([{"path": "/name", "op": "replace", "value": value}])
}

// =============================================================================
// Authentication
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_login_returns_access_token() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_401() {
        let (server, _storage) = create_test_server();
        let response = server
            .post("/api/User/Authentication")
            .json(&json!({"username": "noraivo", "password": "wrong"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_malformed_body_returns_400() {
        let (server, _storage) = create_test_server();
        let response = server
            .post("/api/User/Authentication")
            .text("{not json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_food_routes_require_token() {
        let (server, _storage) = create_test_server();
        let response = server.get("/api/Food/All").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_food_routes_reject_unknown_token() {
        let (server, _storage) = create_test_server();
        let response = server
            .get("/api/Food/All")
            .add_header(AUTHORIZATION, bearer("forged"))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let (server, _storage) = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}

// =============================================================================
// Create
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_food_id() {
        let (server, storage) = create_test_server();
        let token = login(&server).await;

        let id = create_food(&server, &token, "New food").await;

        let stored = storage.read(&id).await.unwrap().expect("food stored");
        assert_eq!(stored.name(), Some("New food"));
    }

    #[tokio::test]
    async fn test_create_with_empty_required_fields_returns_400() {
        let (server, storage) = create_test_server();
        let token = login(&server).await;

        let response = server
            .post("/api/Food/Create")
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&json!({"Name": "", "Description": ""}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["msg"].as_str().unwrap().contains("Name"));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_missing_description_returns_400() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;

        let response = server
            .post("/api/Food/Create")
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&json!({"Name": "Soup"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// Edit
// =============================================================================

mod edit {
    use super::*;

    #[tokio::test]
    async fn test_edit_returns_200_and_applies_patch() {
        let (server, storage) = create_test_server();
        let token = login(&server).await;
        let id = create_food(&server, &token, "New food").await;

        let response = server
            .patch(&format!("/api/Food/Edit/{}", id))
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&rename_patch("Updated food name"))
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Successfully edited"));

        let stored = storage.read(&id).await.unwrap().unwrap();
        assert_eq!(stored.name(), Some("Updated food name"));
    }

    #[tokio::test]
    async fn test_edit_unknown_id_returns_404() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;

        let response = server
            .patch("/api/Food/Edit/1234567890")
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&rename_patch("Updated food name"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_invalid_patch_returns_400() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;
        let id = create_food(&server, &token, "New food").await;

        let response = server
            .patch(&format!("/api/Food/Edit/{}", id))
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&json!({"name": "not a patch"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// List and delete
// =============================================================================

mod list_and_delete {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_created_foods() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;
        let first = create_food(&server, &token, "First").await;
        let second = create_food(&server, &token, "Second").await;

        let response = server
            .get("/api/Food/All")
            .add_header(AUTHORIZATION, bearer(&token))
            .await;

        response.assert_status_ok();
        let foods: Vec<Value> = response.json();
        let ids: Vec<&str> = foods.iter().filter_map(|f| f["id"].as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    }

    #[tokio::test]
    async fn test_list_empty_returns_200() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;

        let response = server
            .get("/api/Food/All")
            .add_header(AUTHORIZATION, bearer(&token))
            .await;

        response.assert_status_ok();
        let foods: Vec<Value> = response.json();
        assert!(foods.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_200() {
        let (server, storage) = create_test_server();
        let token = login(&server).await;
        let id = create_food(&server, &token, "New food").await;

        let response = server
            .delete(&format!("/api/Food/Delete/{}", id))
            .add_header(AUTHORIZATION, bearer(&token))
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Deleted successfully!"));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_400() {
        let (server, _storage) = create_test_server();
        let token = login(&server).await;

        let response = server
            .delete("/api/Food/Delete/1234567890")
            .add_header(AUTHORIZATION, bearer(&token))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Unable to delete this food revue!"));
    }
}
