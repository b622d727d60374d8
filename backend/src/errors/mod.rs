//! Global application error types and handlers.
//!
//! `ApiError` is the one place where domain, auth and storage failures are
//! translated into HTTP responses. Every error body has the shape
//! `{"message": "..."}`. Uncategorized failures are logged and reported to the
//! client as a bare "Server error" so storage internals never leak.

use adapters::AdapterError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("server error: {0}")]
    Server(String),
}

impl ApiError {
    pub fn hospital_not_found() -> Self {
        Self::NotFound("Hospital not found".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::DuplicateKey { .. } => ApiError::Conflict("Hospital already exists".into()),
            AdapterError::MissingDocument(_) => ApiError::hospital_not_found(),
            AdapterError::InvalidId(id) => ApiError::Validation(format!("Invalid id: {id}")),
            AdapterError::VersionConflict { .. } => {
                ApiError::Conflict("Hospital was modified concurrently, retry the request".into())
            }
            other => ApiError::Server(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::MissingToken | AuthError::InvalidToken(_) | AuthError::Forbidden { .. } => {
                ApiError::Unauthorized
            }
            other => ApiError::Server(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Server(detail) => {
                error!(%detail, "request failed");
                "Server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_typed_api_errors() {
        let dup = AdapterError::DuplicateKey {
            field: "email",
            value: "a@example.com".into(),
        };
        assert_eq!(ApiError::from(dup).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(AdapterError::MissingDocument("x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AdapterError::Backend("disk full".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        use http_body_util::BodyExt;

        let response = ApiError::Server("connection string postgres://secret".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Server error" }));
    }
}
