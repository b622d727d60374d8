//! Read access to the requests and appointments attached to a hospital.
//!
//! The records themselves are written by the request module; this service
//! only resolves a hospital's stored references in order.

use adapters::{AppointmentRecord, DocumentId, RequestRecord};

use crate::auth::{authorize, Caller, Operation};
use crate::database::Database;
use crate::errors::ApiError;

#[derive(Clone)]
pub struct RecordAccess {
    db: Database,
}

impl RecordAccess {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn requests(
        &self,
        caller: &Caller,
        hospital_id: &DocumentId,
    ) -> Result<Vec<RequestRecord>, ApiError> {
        authorize(caller, Operation::ViewRequests)?;
        let hospital = self.db.find_hospital(hospital_id).await?;
        self.db.resolve_requests(&hospital).await
    }

    pub async fn appointments(
        &self,
        caller: &Caller,
        hospital_id: &DocumentId,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        authorize(caller, Operation::ViewAppointments)?;
        let hospital = self.db.find_hospital(hospital_id).await?;
        self.db.resolve_appointments(&hospital).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use adapters::InMemoryStore;
    use chrono::{Duration, Utc};

    use crate::database::NewHospital;

    async fn setup() -> (RecordAccess, Arc<InMemoryStore>, DocumentId) {
        let store = Arc::new(InMemoryStore::new());
        let db = Database::from_store(store.clone(), 3);
        let doc = NewHospital {
            name: "Hilltop".into(),
            address: String::new(),
            contact_number: String::new(),
            email: "hilltop@example.com".into(),
            password: "pw".into(),
            total_beds: 4,
            city: String::new(),
        }
        .into_document("hash".into());
        let id = db.insert_hospital(doc).await.unwrap().id;
        (RecordAccess::new(db), store, id)
    }

    #[tokio::test]
    async fn requests_resolve_for_hospital_and_staff() {
        let (records, store, id) = setup().await;
        let user = DocumentId::generate();
        let first = RequestRecord::pending(id.clone(), user.clone());
        let second = RequestRecord::pending(id.clone(), user);
        store.attach_request(first.clone()).await.unwrap();
        store.attach_request(second.clone()).await.unwrap();

        let as_hospital = records.requests(&Caller::hospital(id.clone()), &id).await.unwrap();
        assert_eq!(as_hospital, vec![first, second]);

        let staff = Caller::sub_admin(DocumentId::generate(), id.clone());
        assert_eq!(records.requests(&staff, &id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn appointments_are_hospital_only() {
        let (records, store, id) = setup().await;
        let appointment = AppointmentRecord::scheduled(
            id.clone(),
            DocumentId::generate(),
            Utc::now() + Duration::hours(3),
        );
        store.attach_appointment(appointment.clone()).await.unwrap();

        let list = records.appointments(&Caller::hospital(id.clone()), &id).await.unwrap();
        assert_eq!(list, vec![appointment]);

        let staff = Caller::sub_admin(DocumentId::generate(), id.clone());
        assert!(matches!(
            records.appointments(&staff, &id).await,
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn unknown_hospital_is_not_found() {
        let (records, _, id) = setup().await;
        let caller = Caller::hospital(id);
        assert!(matches!(
            records.requests(&caller, &DocumentId::generate()).await,
            Err(ApiError::NotFound(_))
        ));
    }
}
