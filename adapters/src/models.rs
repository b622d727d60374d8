//! Generic data models for the `adapters` crate.
//!
//! These models describe documents as the store persists them. The backend
//! derives its API projections from them and never exposes them directly.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::errors::AdapterError;

const ID_BYTES: usize = 12;

/// Twelve-byte document identifier rendered as 24 lowercase hex characters.
///
/// The first four bytes hold the creation time in unix seconds (big endian),
/// the remaining eight are random.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..]);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DocumentId {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| AdapterError::InvalidId(s.to_string()))?;
        if bytes.len() != ID_BYTES {
            return Err(AdapterError::InvalidId(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for DocumentId {
    type Error = AdapterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A hospital as persisted by the store, including its password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDocument {
    pub id: DocumentId,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub password_hash: String,
    pub city: String,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub available_beds: u32,
    pub sub_admins: Vec<DocumentId>,
    pub requests: Vec<DocumentId>,
    pub appointments: Vec<DocumentId>,
    /// Optimistic-concurrency token, bumped by the store on every replace.
    pub version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A patient's bed request, owned by the request collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: DocumentId,
    pub hospital_id: DocumentId,
    pub user_id: DocumentId,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl RequestRecord {
    pub fn pending(hospital_id: DocumentId, user_id: DocumentId) -> Self {
        Self {
            id: DocumentId::generate(),
            hospital_id,
            user_id,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: DocumentId,
    pub hospital_id: DocumentId,
    pub user_id: DocumentId,
    pub scheduled_for: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl AppointmentRecord {
    pub fn scheduled(
        hospital_id: DocumentId,
        user_id: DocumentId,
        scheduled_for: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DocumentId::generate(),
            hospital_id,
            user_id,
            scheduled_for,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        }
    }
}
