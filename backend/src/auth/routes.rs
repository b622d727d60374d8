//! Defines the HTTP routes specifically for authentication.
//!
//! These routes are public and merged into the main Axum router.

use axum::routing::post;
use axum::Router;

use super::handlers::login;
use crate::state::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new().route("/hospitals/login", post(login))
}
