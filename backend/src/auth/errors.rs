//! Custom error types specific to authentication failures.
//!
//! Token, password-hash and authorization failures are collected here and
//! converted into `ApiError` at the HTTP boundary.

use thiserror::Error;

use super::models::Role;
use super::policy::Operation;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("role {role} may not perform {operation:?}")]
    Forbidden { role: Role, operation: Operation },

    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("token signing failed: {0}")]
    TokenIssue(String),

    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
