//! Module for database access setup and common utilities.
//!
//! `Database` wraps the document-store ports from the `adapters` crate and
//! carries the retry budget for versioned writes. It is cheap to clone and is
//! shared by every service.

pub mod models;
pub mod queries;

use std::sync::Arc;

use adapters::{HospitalStore, InMemoryStore, RecordStore};

pub use models::*;

#[derive(Clone)]
pub struct Database {
    hospitals: Arc<dyn HospitalStore>,
    records: Arc<dyn RecordStore>,
    write_retries: u32,
}

impl Database {
    pub fn new(
        hospitals: Arc<dyn HospitalStore>,
        records: Arc<dyn RecordStore>,
        write_retries: u32,
    ) -> Self {
        Self {
            hospitals,
            records,
            write_retries,
        }
    }

    /// One store serving both the hospital and record collections.
    pub fn from_store<S>(store: Arc<S>, write_retries: u32) -> Self
    where
        S: HospitalStore + RecordStore + 'static,
    {
        Self::new(store.clone(), store, write_retries)
    }

    pub fn in_memory(write_retries: u32) -> Self {
        Self::from_store(Arc::new(InMemoryStore::new()), write_retries)
    }
}
