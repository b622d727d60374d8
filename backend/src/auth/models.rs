//! Data structures for authentication-related entities.
//!
//! This module defines the caller roles, the JWT claims, the authenticated
//! caller identity attached to requests, and the login request/response
//! bodies.

use std::fmt;

use adapters::DocumentId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "hospital")]
    Hospital,
    #[serde(rename = "subAdmin")]
    SubAdmin,
    #[serde(rename = "user")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hospital => "hospital",
            Role::SubAdmin => "subAdmin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub role: Role,
    /// Hospital a sub-admin acts for. Absent on hospital and user tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    pub iat: u64,
    pub exp: u64,
}

/// Identity of an authenticated caller, inserted into request extensions by
/// the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: DocumentId,
    pub role: Role,
    pub hospital: Option<DocumentId>,
}

impl Caller {
    pub fn hospital(id: DocumentId) -> Self {
        Self {
            id,
            role: Role::Hospital,
            hospital: None,
        }
    }

    pub fn sub_admin(id: DocumentId, hospital: DocumentId) -> Self {
        Self {
            id,
            role: Role::SubAdmin,
            hospital: Some(hospital),
        }
    }

    pub fn user(id: DocumentId) -> Self {
        Self {
            id,
            role: Role::User,
            hospital: None,
        }
    }

    /// The hospital whose beds this caller manages.
    pub fn hospital_id(&self) -> &DocumentId {
        self.hospital.as_ref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub id: DocumentId,
    pub role: Role,
}
