//! Health check endpoint handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::storage::FoodStorage;

/// Handler for `GET [base]/health`.
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: FoodStorage,
{
    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (StatusCode::OK, Json(health_response)).into_response()
}
