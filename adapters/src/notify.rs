//! Adapter for the "notify interested users" collaborator.
//!
//! The backend calls it whenever a bed is released. Delivery (push, mail,
//! sms) belongs to the request module; the default implementation only
//! records the event in the trace log.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AdapterError;
use crate::models::DocumentId;

#[async_trait]
pub trait BedNotifier: Send + Sync {
    async fn bed_released(&self, hospital_id: &DocumentId) -> Result<(), AdapterError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl BedNotifier for TracingNotifier {
    async fn bed_released(&self, hospital_id: &DocumentId) -> Result<(), AdapterError> {
        info!(hospital_id = %hospital_id, "bed released, notifying waiting users");
        Ok(())
    }
}
