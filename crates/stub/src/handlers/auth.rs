//! Login handler.
//!
//! `POST [base]/api/User/Authentication`

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{StubError, StubResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::storage::FoodStorage;

/// Handler for the login endpoint.
///
/// # Response
///
/// - `200 OK` - `{"username": ..., "accessToken": ...}`
/// - `400 Bad Request` - Body is not a login document
/// - `401 Unauthorized` - Unknown credentials
pub async fn login_handler<S>(State(state): State<AppState<S>>, body: Bytes) -> StubResult<Response>
where
    S: FoodStorage,
{
    let request: LoginRequest =
        serde_json::from_slice(&body).map_err(|e| StubError::BadRequest {
            message: format!("Invalid login body: {}", e),
        })?;

    debug!(username = %request.username, "Processing login request");

    let config = state.config();
    if request.username != config.username || request.password != config.password {
        return Err(StubError::Unauthorized {
            message: "Invalid username or password".to_string(),
        });
    }

    let access_token = state.tokens().issue(&request.username);
    let response = LoginResponse {
        username: request.username,
        access_token,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
