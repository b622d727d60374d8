//! Hospital directory: registration, listing, profile reads, updates and
//! removal of hospital records.

use std::sync::Arc;

use adapters::DocumentId;
use futures::future::try_join_all;
use tracing::info;

use crate::auth::{authorize, AuthService, Caller, Operation};
use crate::database::{Database, HospitalListing, HospitalProfile, HospitalUpdate, NewHospital};
use crate::errors::ApiError;

#[derive(Clone)]
pub struct HospitalDirectory {
    db: Database,
    auth: Arc<AuthService>,
}

impl HospitalDirectory {
    pub fn new(db: Database, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }

    pub async fn create(&self, mut new: NewHospital) -> Result<HospitalProfile, ApiError> {
        new.validate()?;
        if self.db.find_hospital_by_email(&new.email).await?.is_some() {
            return Err(ApiError::Conflict("Hospital already exists".into()));
        }
        let hash = self.auth.hash_password(std::mem::take(&mut new.password)).await?;
        let saved = self.db.insert_hospital(new.into_document(hash)).await?;
        info!(hospital_id = %saved.id, "hospital registered");
        Ok(saved.into())
    }

    /// Hashes every password concurrently, then writes the batch in one call.
    /// Any failure rejects the whole batch.
    pub async fn create_bulk(&self, batch: Vec<NewHospital>) -> Result<Vec<HospitalProfile>, ApiError> {
        for new in &batch {
            new.validate()?;
        }
        let docs = try_join_all(batch.into_iter().map(|mut new| async move {
            let hash = self.auth.hash_password(std::mem::take(&mut new.password)).await?;
            Ok::<_, ApiError>(new.into_document(hash))
        }))
        .await?;
        let saved = self.db.insert_hospitals(docs).await?;
        info!(count = saved.len(), "hospital batch registered");
        Ok(saved.into_iter().map(HospitalProfile::from).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<HospitalListing>, ApiError> {
        let hospitals = self.db.list_hospitals().await?;
        Ok(hospitals.into_iter().map(HospitalListing::from).collect())
    }

    pub async fn get_self(&self, caller: &Caller) -> Result<HospitalProfile, ApiError> {
        authorize(caller, Operation::ViewOwnRecord)?;
        Ok(self.db.find_hospital(&caller.id).await?.into())
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: &DocumentId,
        update: HospitalUpdate,
    ) -> Result<HospitalProfile, ApiError> {
        authorize(caller, Operation::UpdateHospital)?;
        let saved = self.db.modify_hospital(id, |doc| update.apply(doc)).await?;
        info!(hospital_id = %id, "hospital updated");
        Ok(saved.into())
    }

    pub async fn delete(&self, caller: &Caller, id: &DocumentId) -> Result<(), ApiError> {
        authorize(caller, Operation::DeleteHospital)?;
        self.db.delete_hospital(id).await?;
        info!(hospital_id = %id, "hospital deleted");
        Ok(())
    }
}
