//! API-facing models derived from stored hospital documents.
//!
//! Stored documents carry the password hash and the concurrency version;
//! these projections never do. `HospitalListing` is the public directory view
//! and additionally drops staff, request and appointment references.

use adapters::{DocumentId, HospitalDocument};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Registration payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHospital {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_number: String,
    pub email: String,
    pub password: String,
    pub total_beds: u32,
    #[serde(default)]
    pub city: String,
}

impl NewHospital {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".into()));
        }
        if self.email.trim().is_empty() {
            return Err(ApiError::Validation("Email is required".into()));
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation("Password is required".into()));
        }
        Ok(())
    }

    /// Builds the stored document with empty bed usage and no references.
    pub fn into_document(self, password_hash: String) -> HospitalDocument {
        HospitalDocument {
            id: DocumentId::generate(),
            name: self.name,
            address: self.address,
            contact_number: self.contact_number,
            email: self.email,
            password_hash,
            city: self.city,
            total_beds: self.total_beds,
            occupied_beds: 0,
            available_beds: self.total_beds,
            sub_admins: Vec::new(),
            requests: Vec::new(),
            appointments: Vec::new(),
            version: 0,
        }
    }
}

/// Partial update. Empty strings and a zero bed count count as "not sent".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub city: Option<String>,
    pub total_beds: Option<u32>,
}

fn provided(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

impl HospitalUpdate {
    pub fn apply(&self, doc: &mut HospitalDocument) -> Result<(), ApiError> {
        if let Some(total) = self.total_beds.filter(|t| *t > 0) {
            if total < doc.occupied_beds {
                return Err(ApiError::Validation(
                    "Total beds cannot be less than occupied beds".into(),
                ));
            }
            doc.total_beds = total;
            doc.available_beds = total - doc.occupied_beds;
        }
        if let Some(name) = provided(&self.name) {
            doc.name = name.clone();
        }
        if let Some(address) = provided(&self.address) {
            doc.address = address.clone();
        }
        if let Some(contact) = provided(&self.contact_number) {
            doc.contact_number = contact.clone();
        }
        if let Some(city) = provided(&self.city) {
            doc.city = city.clone();
        }
        Ok(())
    }
}

/// Full record as seen by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalProfile {
    pub id: DocumentId,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub city: String,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub available_beds: u32,
    pub sub_admins: Vec<DocumentId>,
    pub requests: Vec<DocumentId>,
    pub appointments: Vec<DocumentId>,
}

impl From<HospitalDocument> for HospitalProfile {
    fn from(doc: HospitalDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            address: doc.address,
            contact_number: doc.contact_number,
            email: doc.email,
            city: doc.city,
            total_beds: doc.total_beds,
            occupied_beds: doc.occupied_beds,
            available_beds: doc.available_beds,
            sub_admins: doc.sub_admins,
            requests: doc.requests,
            appointments: doc.appointments,
        }
    }
}

/// Public directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalListing {
    pub id: DocumentId,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub city: String,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub available_beds: u32,
}

impl From<HospitalDocument> for HospitalListing {
    fn from(doc: HospitalDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            address: doc.address,
            contact_number: doc.contact_number,
            email: doc.email,
            city: doc.city,
            total_beds: doc.total_beds,
            occupied_beds: doc.occupied_beds,
            available_beds: doc.available_beds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedAvailability {
    pub total_beds: u32,
    pub available_beds: u32,
    pub occupied_beds: u32,
}

impl From<&HospitalDocument> for BedAvailability {
    fn from(doc: &HospitalDocument) -> Self {
        Self {
            total_beds: doc.total_beds,
            available_beds: doc.available_beds,
            occupied_beds: doc.occupied_beds,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyUpdate {
    pub occupied_beds: u32,
}
