//! General-purpose middleware for the API.
//!
//! Request tracing and CORS for the single-page frontend, applied to the
//! whole router. Token checks live in `auth::middleware`.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
