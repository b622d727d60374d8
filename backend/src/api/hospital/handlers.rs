//! Handler functions for the hospital directory API.
//!
//! These functions unpack path and body, call the directory and record
//! services, and shape the JSON responses.

use adapters::{AppointmentRecord, RequestRecord};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::api::parse_id;
use crate::auth::Caller;
use crate::database::{HospitalListing, HospitalProfile, HospitalUpdate, NewHospital};
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn create_hospital(
    State(state): State<AppState>,
    payload: Result<Json<NewHospital>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(new) = payload?;
    let hospital = state.directory.create(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Hospital created successfully", "hospital": hospital })),
    ))
}

pub async fn create_hospitals(
    State(state): State<AppState>,
    payload: Result<Json<Vec<NewHospital>>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(batch) = payload?;
    let hospitals = state.directory.create_bulk(batch).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Hospitals created successfully", "hospitals": hospitals })),
    ))
}

pub async fn list_hospitals(
    State(state): State<AppState>,
) -> Result<Json<Vec<HospitalListing>>, ApiError> {
    Ok(Json(state.directory.list_all().await?))
}

pub async fn get_own_hospital(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<HospitalProfile>, ApiError> {
    Ok(Json(state.directory.get_self(&caller).await?))
}

pub async fn update_hospital(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    payload: Result<Json<HospitalUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(update) = payload?;
    let id = parse_id(&id)?;
    let hospital = state.directory.update(&caller, &id, update).await?;
    Ok(Json(json!({ "message": "Hospital updated successfully", "hospital": hospital })))
}

pub async fn delete_hospital(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    state.directory.delete(&caller, &id).await?;
    Ok(Json(json!({ "message": "Hospital deleted successfully" })))
}

pub async fn get_requests(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Vec<RequestRecord>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.records.requests(&caller, &id).await?))
}

pub async fn get_appointments(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Vec<AppointmentRecord>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.records.appointments(&caller, &id).await?))
}
