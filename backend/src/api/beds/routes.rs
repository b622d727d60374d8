//! Defines the HTTP routes for bed counts. All of them require a token.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    decrement_availability, get_availability, increment_availability, set_occupancy,
};
use crate::state::AppState;

pub fn beds_router() -> Router<AppState> {
    Router::new()
        .route("/hospitals/:id/beds", put(set_occupancy))
        .route("/hospitals/me/beds/increment", post(increment_availability))
        .route("/hospitals/me/beds/decrement", post(decrement_availability))
        .route("/hospitals/me/availability", get(get_availability))
}
