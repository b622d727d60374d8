//! Bed inventory: keeps `occupied + available == total` for each hospital.
//!
//! Every mutation goes through `Database::modify_hospital`, so concurrent
//! updates to the same hospital are serialized by the document version
//! instead of overwriting each other.

use std::sync::Arc;

use adapters::{BedNotifier, DocumentId, HospitalDocument};
use tracing::{info, warn};

use crate::auth::{authorize, Caller, Operation};
use crate::database::{BedAvailability, Database, HospitalProfile};
use crate::errors::ApiError;

#[derive(Clone)]
pub struct BedInventory {
    db: Database,
    notifier: Arc<dyn BedNotifier>,
}

fn release_bed(doc: &mut HospitalDocument) -> Result<(), ApiError> {
    if doc.occupied_beds == 0 {
        return Err(ApiError::Validation("No occupied beds to release".into()));
    }
    doc.occupied_beds -= 1;
    doc.available_beds = doc.total_beds - doc.occupied_beds;
    Ok(())
}

fn occupy_bed(doc: &mut HospitalDocument) -> Result<(), ApiError> {
    if doc.occupied_beds >= doc.total_beds {
        return Err(ApiError::Validation("No available beds".into()));
    }
    doc.occupied_beds += 1;
    doc.available_beds = doc.total_beds - doc.occupied_beds;
    Ok(())
}

impl BedInventory {
    pub fn new(db: Database, notifier: Arc<dyn BedNotifier>) -> Self {
        Self { db, notifier }
    }

    pub async fn set_occupancy(
        &self,
        caller: &Caller,
        id: &DocumentId,
        occupied_beds: u32,
    ) -> Result<HospitalProfile, ApiError> {
        authorize(caller, Operation::SetOccupancy)?;
        let saved = self
            .db
            .modify_hospital(id, |doc| {
                if occupied_beds > doc.total_beds {
                    return Err(ApiError::Validation(
                        "Occupied beds cannot exceed total beds".into(),
                    ));
                }
                doc.occupied_beds = occupied_beds;
                doc.available_beds = doc.total_beds - occupied_beds;
                Ok(())
            })
            .await?;
        info!(hospital_id = %id, occupied_beds, "occupancy set");
        Ok(saved.into())
    }

    /// A bed became free. Waiting users are notified before the new count is
    /// written; a failed notification leaves the count untouched.
    ///
    /// The write is guarded by the version the notification was based on.
    /// If another writer got there first the release is reapplied to the
    /// fresh document without notifying again. Should that fresh document
    /// have no occupied bed left, the call fails with a validation error and
    /// the notification already sent is not withdrawn.
    pub async fn increment(&self, caller: &Caller) -> Result<HospitalProfile, ApiError> {
        authorize(caller, Operation::AdjustBeds)?;
        let id = caller.hospital_id();
        let mut released = self.db.find_hospital(id).await?;
        release_bed(&mut released)?;
        self.notifier.bed_released(id).await?;
        let saved = self
            .db
            .save_hospital(released, release_bed)
            .await
            .map_err(|err| {
                if matches!(err, ApiError::Validation(_)) {
                    warn!(hospital_id = %id, "users were notified of a bed taken by a concurrent write");
                }
                err
            })?;
        info!(hospital_id = %id, available = saved.available_beds, "bed released");
        Ok(saved.into())
    }

    /// A bed was taken.
    pub async fn decrement(&self, caller: &Caller) -> Result<HospitalProfile, ApiError> {
        authorize(caller, Operation::AdjustBeds)?;
        let id = caller.hospital_id();
        let saved = self.db.modify_hospital(id, occupy_bed).await?;
        info!(hospital_id = %id, available = saved.available_beds, "bed occupied");
        Ok(saved.into())
    }

    pub async fn availability(&self, caller: &Caller) -> Result<BedAvailability, ApiError> {
        authorize(caller, Operation::ViewAvailability)?;
        let doc = self.db.find_hospital(caller.hospital_id()).await?;
        Ok(BedAvailability::from(&doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use adapters::AdapterError;
    use async_trait::async_trait;

    use crate::database::NewHospital;

    #[derive(Default)]
    struct CountingNotifier {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl BedNotifier for CountingNotifier {
        async fn bed_released(&self, _hospital_id: &DocumentId) -> Result<(), AdapterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AdapterError::Notification("queue offline".into()));
            }
            Ok(())
        }
    }

    async fn setup(notifier: Arc<CountingNotifier>) -> (BedInventory, Database, Caller) {
        let db = Database::in_memory(8);
        let doc = NewHospital {
            name: "Riverside".into(),
            address: String::new(),
            contact_number: String::new(),
            email: "riverside@example.com".into(),
            password: "pw".into(),
            total_beds: 10,
            city: String::new(),
        }
        .into_document("hash".into());
        let doc = db.insert_hospital(doc).await.unwrap();
        let inventory = BedInventory::new(db.clone(), notifier);
        (inventory, db, Caller::hospital(doc.id))
    }

    #[tokio::test]
    async fn decrement_twice_then_overfill_is_rejected() {
        let (beds, db, caller) = setup(Arc::default()).await;
        beds.decrement(&caller).await.unwrap();
        let after = beds.decrement(&caller).await.unwrap();
        assert_eq!((after.occupied_beds, after.available_beds), (2, 8));

        let err = beds.set_occupancy(&caller, &caller.id, 11).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let stored = db.find_hospital(&caller.id).await.unwrap();
        assert_eq!((stored.occupied_beds, stored.available_beds), (2, 8));
    }

    #[tokio::test]
    async fn set_occupancy_recomputes_availability() {
        let (beds, _, caller) = setup(Arc::default()).await;
        let saved = beds.set_occupancy(&caller, &caller.id, 10).await.unwrap();
        assert_eq!((saved.occupied_beds, saved.available_beds), (10, 0));
        let saved = beds.set_occupancy(&caller, &caller.id, 0).await.unwrap();
        assert_eq!((saved.occupied_beds, saved.available_beds), (0, 10));
    }

    #[tokio::test]
    async fn increment_notifies_once_and_frees_a_bed() {
        let notifier = Arc::new(CountingNotifier::default());
        let (beds, _, caller) = setup(notifier.clone()).await;
        beds.set_occupancy(&caller, &caller.id, 3).await.unwrap();

        let saved = beds.increment(&caller).await.unwrap();
        assert_eq!((saved.occupied_beds, saved.available_beds), (2, 8));
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn counters_never_leave_their_bounds() {
        let notifier = Arc::new(CountingNotifier::default());
        let (beds, db, caller) = setup(notifier.clone()).await;

        assert!(matches!(beds.increment(&caller).await, Err(ApiError::Validation(_))));
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);

        beds.set_occupancy(&caller, &caller.id, 10).await.unwrap();
        assert!(matches!(beds.decrement(&caller).await, Err(ApiError::Validation(_))));

        let stored = db.find_hospital(&caller.id).await.unwrap();
        assert_eq!(stored.occupied_beds + stored.available_beds, stored.total_beds);
    }

    #[tokio::test]
    async fn failed_notification_keeps_the_count() {
        let notifier = Arc::new(CountingNotifier {
            fail: true,
            ..Default::default()
        });
        let (beds, db, caller) = setup(notifier).await;
        beds.set_occupancy(&caller, &caller.id, 4).await.unwrap();

        let err = beds.increment(&caller).await.unwrap_err();
        assert!(matches!(err, ApiError::Server(_)));
        assert_eq!(db.find_hospital(&caller.id).await.unwrap().occupied_beds, 4);
    }

    /// Sets the occupied count from another writer while users are being
    /// notified, so the released document is stale by the time it is saved.
    struct RacingNotifier {
        db: Database,
        occupied_meanwhile: u32,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BedNotifier for RacingNotifier {
        async fn bed_released(&self, hospital_id: &DocumentId) -> Result<(), AdapterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let occupied = self.occupied_meanwhile;
            self.db
                .modify_hospital(hospital_id, |doc| {
                    doc.occupied_beds = occupied;
                    doc.available_beds = doc.total_beds - occupied;
                    Ok(())
                })
                .await
                .map_err(|err| AdapterError::Backend(err.to_string()))?;
            Ok(())
        }
    }

    async fn racing(
        occupied_before: u32,
        occupied_meanwhile: u32,
    ) -> (BedInventory, Arc<RacingNotifier>, Caller) {
        let (plain, db, caller) = setup(Arc::default()).await;
        plain.set_occupancy(&caller, &caller.id, occupied_before).await.unwrap();
        let notifier = Arc::new(RacingNotifier {
            db: db.clone(),
            occupied_meanwhile,
            calls: AtomicUsize::new(0),
        });
        (BedInventory::new(db, notifier.clone()), notifier, caller)
    }

    #[tokio::test]
    async fn increment_reapplies_the_release_after_a_concurrent_write() {
        let (beds, notifier, caller) = racing(3, 5).await;
        let saved = beds.increment(&caller).await.unwrap();
        assert_eq!((saved.occupied_beds, saved.available_beds), (4, 6));
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn increment_fails_when_a_concurrent_write_took_the_last_occupied_bed() {
        let (beds, notifier, caller) = racing(1, 0).await;
        let err = beds.increment(&caller).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);

        let stored = beds.availability(&caller).await.unwrap();
        assert_eq!((stored.occupied_beds, stored.available_beds), (0, 10));
    }

    #[tokio::test]
    async fn sub_admins_adjust_their_hospitals_beds() {
        let (beds, _, hospital) = setup(Arc::default()).await;
        let staff = Caller::sub_admin(DocumentId::generate(), hospital.id.clone());
        let saved = beds.decrement(&staff).await.unwrap();
        assert_eq!(saved.id, hospital.id);
        assert_eq!(saved.occupied_beds, 1);

        assert!(matches!(beds.availability(&staff).await, Err(ApiError::Unauthorized)));
        let snapshot = beds.availability(&hospital).await.unwrap();
        assert_eq!(
            snapshot,
            BedAvailability { total_beds: 10, available_beds: 9, occupied_beds: 1 }
        );
    }

    #[tokio::test]
    async fn users_cannot_touch_beds() {
        let (beds, _, hospital) = setup(Arc::default()).await;
        let user = Caller::user(DocumentId::generate());
        assert!(matches!(beds.decrement(&user).await, Err(ApiError::Unauthorized)));
        assert!(matches!(
            beds.set_occupancy(&user, &hospital.id, 1).await,
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn concurrent_decrements_do_not_lose_updates() {
        let (beds, db, caller) = setup(Arc::default()).await;
        let tasks: Vec<_> = (0..5)
            .map(|_| {
                let beds = beds.clone();
                let caller = caller.clone();
                tokio::spawn(async move { beds.decrement(&caller).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        let stored = db.find_hospital(&caller.id).await.unwrap();
        assert_eq!((stored.occupied_beds, stored.available_beds), (5, 5));
    }
}
