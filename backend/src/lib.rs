//! BedWatch backend library.
//!
//! Exposes the Axum router and its building blocks so the binary and the
//! integration tests assemble the same application.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

pub use config::Config;
pub use errors::ApiError;
pub use state::AppState;

/// Builds the full router: public routes, token-protected routes, and the
/// HTTP middleware stack.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(root_handler))
        .merge(auth::auth_router())
        .merge(api::hospital::routes::public_router());

    let protected = Router::new()
        .merge(api::hospital::routes::protected_router())
        .merge(api::beds::routes::beds_router())
        .route_layer(from_fn_with_state(state.clone(), auth::require_auth));

    middleware::apply(public.merge(protected)).with_state(state)
}

async fn root_handler() -> &'static str {
    "Welcome to BedWatch!"
}
