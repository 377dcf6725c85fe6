//! HTTP request handlers for the Food API.

pub mod auth;
pub mod food;
pub mod health;

pub use auth::login_handler;
pub use food::{create_food_handler, delete_food_handler, edit_food_handler, list_foods_handler};
pub use health::health_handler;
