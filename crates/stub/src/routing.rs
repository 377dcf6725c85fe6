//! Route configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::auth::require_bearer;
use crate::handlers;
use crate::state::AppState;
use crate::storage::FoodStorage;

/// Creates all Food API routes.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `POST /api/User/Authentication` - Login
///
/// ## Bearer token required
/// - `POST /api/Food/Create` - Create
/// - `PATCH /api/Food/Edit/{id}` - Edit (JSON Patch)
/// - `GET /api/Food/All` - List
/// - `DELETE /api/Food/Delete/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: FoodStorage + 'static,
{
    let food_routes = Router::new()
        .route("/api/Food/Create", post(handlers::create_food_handler::<S>))
        .route("/api/Food/Edit/{id}", patch(handlers::edit_food_handler::<S>))
        .route("/api/Food/All", get(handlers::list_foods_handler::<S>))
        .route(
            "/api/Food/Delete/{id}",
            delete(handlers::delete_food_handler::<S>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<S>,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route(
            "/api/User/Authentication",
            post(handlers::login_handler::<S>),
        )
        .merge(food_routes)
        .with_state(state)
}
