//! In-memory document store.
//!
//! Holds hospitals, requests and appointments behind a single `RwLock`, so a
//! write and its unique-index check happen atomically. Used by the binary in
//! place of an external database and by every test.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::AdapterError;
use crate::models::{AppointmentRecord, DocumentId, HospitalDocument, RequestRecord};
use crate::{HospitalStore, RecordStore};

#[derive(Debug, Default)]
struct Collections {
    hospitals: Vec<HospitalDocument>,
    requests: HashMap<DocumentId, RequestRecord>,
    appointments: HashMap<DocumentId, AppointmentRecord>,
}

impl Collections {
    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.hospitals.iter().position(|h| &h.id == id)
    }

    fn email_taken(&self, email: &str, except: Option<&DocumentId>) -> bool {
        self.hospitals
            .iter()
            .any(|h| h.email == email && Some(&h.id) != except)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a request and appends its id to the owning hospital.
    pub async fn attach_request(&self, record: RequestRecord) -> Result<(), AdapterError> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .position(&record.hospital_id)
            .ok_or_else(|| AdapterError::MissingDocument(record.hospital_id.to_string()))?;
        let hospital = &mut inner.hospitals[idx];
        hospital.requests.push(record.id.clone());
        hospital.version += 1;
        inner.requests.insert(record.id.clone(), record);
        Ok(())
    }

    /// Stores an appointment and appends its id to the owning hospital.
    pub async fn attach_appointment(&self, record: AppointmentRecord) -> Result<(), AdapterError> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .position(&record.hospital_id)
            .ok_or_else(|| AdapterError::MissingDocument(record.hospital_id.to_string()))?;
        let hospital = &mut inner.hospitals[idx];
        hospital.appointments.push(record.id.clone());
        hospital.version += 1;
        inner.appointments.insert(record.id.clone(), record);
        Ok(())
    }
}

#[async_trait]
impl HospitalStore for InMemoryStore {
    async fn insert(&self, doc: HospitalDocument) -> Result<HospitalDocument, AdapterError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(&doc.email, None) {
            return Err(AdapterError::DuplicateKey {
                field: "email",
                value: doc.email,
            });
        }
        debug!(id = %doc.id, "inserting hospital document");
        inner.hospitals.push(doc.clone());
        Ok(doc)
    }

    async fn insert_many(
        &self,
        docs: Vec<HospitalDocument>,
    ) -> Result<Vec<HospitalDocument>, AdapterError> {
        let mut inner = self.inner.write().await;
        for (i, doc) in docs.iter().enumerate() {
            let repeated = docs[..i].iter().any(|d| d.email == doc.email);
            if repeated || inner.email_taken(&doc.email, None) {
                return Err(AdapterError::DuplicateKey {
                    field: "email",
                    value: doc.email.clone(),
                });
            }
        }
        debug!(count = docs.len(), "inserting hospital batch");
        inner.hospitals.extend(docs.iter().cloned());
        Ok(docs)
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<HospitalDocument>, AdapterError> {
        let inner = self.inner.read().await;
        Ok(inner.hospitals.iter().find(|h| &h.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<HospitalDocument>, AdapterError> {
        let inner = self.inner.read().await;
        Ok(inner.hospitals.iter().find(|h| h.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<HospitalDocument>, AdapterError> {
        Ok(self.inner.read().await.hospitals.clone())
    }

    async fn replace(&self, mut doc: HospitalDocument) -> Result<HospitalDocument, AdapterError> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .position(&doc.id)
            .ok_or_else(|| AdapterError::MissingDocument(doc.id.to_string()))?;
        let found = inner.hospitals[idx].version;
        if found != doc.version {
            return Err(AdapterError::VersionConflict {
                id: doc.id.to_string(),
                expected: doc.version,
                found,
            });
        }
        if inner.email_taken(&doc.email, Some(&doc.id)) {
            return Err(AdapterError::DuplicateKey {
                field: "email",
                value: doc.email,
            });
        }
        doc.version += 1;
        inner.hospitals[idx] = doc.clone();
        Ok(doc)
    }

    async fn delete(&self, id: &DocumentId) -> Result<Option<HospitalDocument>, AdapterError> {
        let mut inner = self.inner.write().await;
        Ok(inner.position(id).map(|idx| inner.hospitals.remove(idx)))
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn requests_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<RequestRecord>, AdapterError> {
        let inner = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| inner.requests.get(id).cloned())
            .collect())
    }

    async fn appointments_by_ids(
        &self,
        ids: &[DocumentId],
    ) -> Result<Vec<AppointmentRecord>, AdapterError> {
        let inner = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| inner.appointments.get(id).cloned())
            .collect())
    }
}
