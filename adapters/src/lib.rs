//! Core `adapters` crate for abstracting the BedWatch backend's collaborators.
//!
//! This crate defines the `HospitalStore` and `RecordStore` traits describing the
//! document store, the `BedNotifier` trait describing the "notify users" side
//! effect, and concrete implementations of both (in-memory store, tracing
//! notifier).

pub mod errors;
pub mod memory;
pub mod models;
pub mod notify;

use async_trait::async_trait;

pub use errors::AdapterError;
pub use memory::InMemoryStore;
pub use models::{
    AppointmentRecord, AppointmentStatus, DocumentId, HospitalDocument, RequestRecord,
    RequestStatus,
};
pub use notify::{BedNotifier, TracingNotifier};

/// Persistence port for hospital documents.
///
/// Implementations enforce a unique email index and compare the document
/// `version` on `replace`.
#[async_trait]
pub trait HospitalStore: Send + Sync {
    async fn insert(&self, doc: HospitalDocument) -> Result<HospitalDocument, AdapterError>;

    /// Writes the whole batch or nothing.
    async fn insert_many(
        &self,
        docs: Vec<HospitalDocument>,
    ) -> Result<Vec<HospitalDocument>, AdapterError>;

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<HospitalDocument>, AdapterError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<HospitalDocument>, AdapterError>;

    /// All documents in insertion order.
    async fn list(&self) -> Result<Vec<HospitalDocument>, AdapterError>;

    /// Replaces the stored document if its version still equals `doc.version`.
    /// Returns the stored copy with the bumped version.
    async fn replace(&self, doc: HospitalDocument) -> Result<HospitalDocument, AdapterError>;

    /// Removes the document, returning it if it existed.
    async fn delete(&self, id: &DocumentId) -> Result<Option<HospitalDocument>, AdapterError>;
}

/// Read port over the request and appointment collections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Resolves ids in the given order, skipping dangling references.
    async fn requests_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<RequestRecord>, AdapterError>;

    async fn appointments_by_ids(
        &self,
        ids: &[DocumentId],
    ) -> Result<Vec<AppointmentRecord>, AdapterError>;
}
