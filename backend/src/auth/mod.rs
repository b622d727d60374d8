//! Authentication module for hospital accounts, sessions, and access control.
//!
//! This module provides password hashing, session token issuance and
//! validation, the login endpoint, the bearer-token middleware, and the
//! role-based authorization table used by every protected operation.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use policy::*;
pub use routes::*;
pub use service::*;
