//! Central module for organizing the application's main API endpoints.
//!
//! Hospital directory and record endpoints live under `hospital`, bed
//! inventory endpoints under `beds`. Login is served by the `auth` module.

pub mod beds;
pub mod hospital;

use adapters::DocumentId;

use crate::errors::ApiError;

pub(crate) fn parse_id(raw: &str) -> Result<DocumentId, ApiError> {
    Ok(raw.parse::<DocumentId>()?)
}
