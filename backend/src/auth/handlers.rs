//! Handler functions for authentication-related API endpoints.
//!
//! Only hospital login is served here; hospital registration lives with the
//! directory endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::models::{LoginRequest, LoginResponse};
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.auth.login(&state.db, request).await?;
    Ok(Json(response))
}
