//! Shared application state handed to every Axum handler.

use std::sync::Arc;

use adapters::{BedNotifier, TracingNotifier};

use crate::auth::AuthService;
use crate::config::Config;
use crate::database::Database;
use crate::services::{BedInventory, HospitalDirectory, RecordAccess};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub db: Database,
    pub directory: HospitalDirectory,
    pub beds: BedInventory,
    pub records: RecordAccess,
}

impl AppState {
    pub fn new(config: &Config, db: Database, notifier: Arc<dyn BedNotifier>) -> Self {
        let auth = Arc::new(AuthService::from_config(config));
        Self {
            directory: HospitalDirectory::new(db.clone(), auth.clone()),
            beds: BedInventory::new(db.clone(), notifier),
            records: RecordAccess::new(db.clone()),
            auth,
            db,
        }
    }

    /// In-memory store with the tracing notifier.
    pub fn in_memory(config: &Config) -> Self {
        let db = Database::in_memory(config.write_retries);
        Self::new(config, db, Arc::new(TracingNotifier))
    }
}
