//! Food CRUD handlers.
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |-------------|-------------|-------------|
//! | create | POST | `/api/Food/Create` |
//! | edit | PATCH | `/api/Food/Edit/{id}` |
//! | list | GET | `/api/Food/All` |
//! | delete | DELETE | `/api/Food/Delete/{id}` |

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{StorageError, StubError, StubResult};
use crate::models::{ApiMessage, CreateFoodRequest, CreatedFoodResponse};
use crate::state::AppState;
use crate::storage::FoodStorage;

/// Handler for the create interaction.
///
/// # Response
///
/// - `201 Created` - `{"foodId": ..., "msg": ...}`
/// - `400 Bad Request` - Body is not JSON, or `Name`/`Description` is blank
pub async fn create_food_handler<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> StubResult<Response>
where
    S: FoodStorage,
{
    let request: CreateFoodRequest =
        serde_json::from_slice(&body).map_err(|e| StubError::BadRequest {
            message: format!("Invalid food body: {}", e),
        })?;

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(StubError::BadRequest {
            message: format!("Required fields are missing: {}", missing.join(", ")),
        });
    }

    let content = json!({
        "name": request.name,
        "description": request.description,
        "url": request.url.unwrap_or_default(),
    });
    let stored = state.storage().create(content).await?;

    debug!(id = %stored.id(), "Food created");

    let response = CreatedFoodResponse {
        food_id: stored.id().to_string(),
        msg: "Successfully created!".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Handler for the edit interaction.
///
/// The body is a JSON Patch (RFC 6902) document applied to the stored
/// `{name, description, url}` object.
///
/// # Response
///
/// - `200 OK` - `{"msg": "Successfully edited"}`
/// - `400 Bad Request` - Invalid patch document, or the patch blanks the name
/// - `404 Not Found` - Food does not exist
pub async fn edit_food_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> StubResult<Response>
where
    S: FoodStorage,
{
    debug!(id = %id, "Processing edit request");

    let patch: json_patch::Patch =
        serde_json::from_slice(&body).map_err(|e| StubError::BadRequest {
            message: format!("Invalid JSON Patch: {}", e),
        })?;

    let existing = state
        .storage()
        .read(&id)
        .await?
        .ok_or_else(|| StubError::NotFound { id: id.clone() })?;

    let patched = apply_patch(existing.content(), &patch)?;
    state.storage().update(&id, patched).await?;

    debug!(id = %id, "Food edited");

    Ok((StatusCode::OK, Json(ApiMessage::new("Successfully edited"))).into_response())
}

/// Handler for the list interaction.
///
/// # Response
///
/// - `200 OK` - JSON array of foods, oldest first
pub async fn list_foods_handler<S>(State(state): State<AppState<S>>) -> StubResult<Response>
where
    S: FoodStorage,
{
    let foods: Vec<Value> = state
        .storage()
        .list()
        .await?
        .iter()
        .map(|food| food.to_json())
        .collect();

    debug!(count = foods.len(), "Listing foods");

    Ok((StatusCode::OK, Json(foods)).into_response())
}

/// Handler for the delete interaction.
///
/// # Response
///
/// - `200 OK` - `{"msg": "Deleted successfully!"}`
/// - `400 Bad Request` - Food does not exist
pub async fn delete_food_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> StubResult<Response>
where
    S: FoodStorage,
{
    debug!(id = %id, "Processing delete request");

    state.storage().delete(&id).await.map_err(|e| match e {
        StorageError::NotFound { id } => StubError::DeleteFailed { id },
        other => other.into(),
    })?;

    Ok((StatusCode::OK, Json(ApiMessage::new("Deleted successfully!"))).into_response())
}

/// Applies a JSON Patch and checks the result is still a valid food.
fn apply_patch(content: &Value, patch: &json_patch::Patch) -> StubResult<Value> {
    let mut patched = content.clone();
    json_patch::patch(&mut patched, patch).map_err(|e| StubError::BadRequest {
        message: format!("Failed to apply JSON Patch: {}", e),
    })?;

    let name_ok = patched
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !name_ok {
        return Err(StubError::BadRequest {
            message: "Name cannot be empty".to_string(),
        });
    }

    Ok(patched)
}
