//! Handler functions for the bed inventory API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::api::parse_id;
use crate::auth::Caller;
use crate::database::{BedAvailability, OccupancyUpdate};
use crate::errors::ApiError;
use crate::state::AppState;

const UPDATED: &str = "Bed availability updated";

pub async fn set_occupancy(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    payload: Result<Json<OccupancyUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(update) = payload?;
    let id = parse_id(&id)?;
    let hospital = state.beds.set_occupancy(&caller, &id, update.occupied_beds).await?;
    Ok(Json(json!({ "message": UPDATED, "hospital": hospital })))
}

pub async fn increment_availability(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Value>, ApiError> {
    let hospital = state.beds.increment(&caller).await?;
    Ok(Json(json!({ "message": UPDATED, "hospital": hospital })))
}

pub async fn decrement_availability(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Value>, ApiError> {
    let hospital = state.beds.decrement(&caller).await?;
    Ok(Json(json!({ "message": UPDATED, "hospital": hospital })))
}

pub async fn get_availability(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<BedAvailability>, ApiError> {
    Ok(Json(state.beds.availability(&caller).await?))
}
