//! Database query functions (Data Access Objects).
//!
//! This module centralizes all store operations used by the services,
//! converting adapter errors into API errors and implementing the versioned
//! read-modify-write cycle used for every document mutation.

use adapters::{AdapterError, AppointmentRecord, DocumentId, HospitalDocument, RequestRecord};
use tracing::warn;

use super::Database;
use crate::errors::ApiError;

impl Database {
    pub async fn find_hospital(&self, id: &DocumentId) -> Result<HospitalDocument, ApiError> {
        self.hospitals
            .find_by_id(id)
            .await?
            .ok_or_else(ApiError::hospital_not_found)
    }

    pub async fn find_hospital_by_email(
        &self,
        email: &str,
    ) -> Result<Option<HospitalDocument>, ApiError> {
        Ok(self.hospitals.find_by_email(email).await?)
    }

    pub async fn insert_hospital(&self, doc: HospitalDocument) -> Result<HospitalDocument, ApiError> {
        Ok(self.hospitals.insert(doc).await?)
    }

    pub async fn insert_hospitals(
        &self,
        docs: Vec<HospitalDocument>,
    ) -> Result<Vec<HospitalDocument>, ApiError> {
        Ok(self.hospitals.insert_many(docs).await?)
    }

    pub async fn list_hospitals(&self) -> Result<Vec<HospitalDocument>, ApiError> {
        Ok(self.hospitals.list().await?)
    }

    pub async fn delete_hospital(&self, id: &DocumentId) -> Result<HospitalDocument, ApiError> {
        self.hospitals
            .delete(id)
            .await?
            .ok_or_else(ApiError::hospital_not_found)
    }

    /// Reads the document, applies `mutate` and writes it back guarded by the
    /// document version. A concurrent write causes the whole cycle to rerun,
    /// at most `write_retries` extra times. A failing `mutate` writes nothing.
    pub async fn modify_hospital<F>(
        &self,
        id: &DocumentId,
        mut mutate: F,
    ) -> Result<HospitalDocument, ApiError>
    where
        F: FnMut(&mut HospitalDocument) -> Result<(), ApiError>,
    {
        let mut doc = self.find_hospital(id).await?;
        mutate(&mut doc)?;
        self.save_hospital(doc, mutate).await
    }

    /// Writes a document the caller already read and mutated, guarded by the
    /// version it was read at. Only on a version conflict is the document
    /// reread and `mutate` applied again.
    pub async fn save_hospital<F>(
        &self,
        mut doc: HospitalDocument,
        mut mutate: F,
    ) -> Result<HospitalDocument, ApiError>
    where
        F: FnMut(&mut HospitalDocument) -> Result<(), ApiError>,
    {
        let id = doc.id.clone();
        let mut attempt = 0;
        loop {
            match self.hospitals.replace(doc).await {
                Ok(saved) => return Ok(saved),
                Err(AdapterError::VersionConflict { found, .. }) if attempt < self.write_retries => {
                    attempt += 1;
                    warn!(hospital_id = %id, found, attempt, "concurrent write detected, retrying");
                    doc = self.find_hospital(&id).await?;
                    mutate(&mut doc)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub async fn resolve_requests(
        &self,
        hospital: &HospitalDocument,
    ) -> Result<Vec<RequestRecord>, ApiError> {
        Ok(self.records.requests_by_ids(&hospital.requests).await?)
    }

    pub async fn resolve_appointments(
        &self,
        hospital: &HospitalDocument,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        Ok(self.records.appointments_by_ids(&hospital.appointments).await?)
    }
}
