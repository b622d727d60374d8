//! Defines the HTTP routes for the hospital directory.
//!
//! Registration and listing are public; everything else sits behind the
//! bearer-token middleware.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    create_hospital, create_hospitals, delete_hospital, get_appointments, get_own_hospital,
    get_requests, list_hospitals, update_hospital,
};
use crate::state::AppState;

pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/hospitals", post(create_hospital).get(list_hospitals))
        .route("/hospitals/bulk", post(create_hospitals))
}

pub fn protected_router() -> Router<AppState> {
    Router::new()
        .route("/hospitals/me", get(get_own_hospital))
        .route("/hospitals/:id", put(update_hospital).delete(delete_hospital))
        .route("/hospitals/:id/requests", get(get_requests))
        .route("/hospitals/:id/appointments", get(get_appointments))
}
