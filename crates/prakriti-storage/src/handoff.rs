use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use prakriti_core::models::handoff::{CompletedAssessment, RecentPatient};
use prakriti_core::store_keys;

use crate::error::StorageError;
use crate::state::{is_fresh, load_state_opt, save_state};
use crate::store::KeyValueStore;

/// A recent-patient record older than this is ignored by the diet flow.
pub const RECENT_MAX_AGE: SignedDuration = SignedDuration::from_secs(5 * 60);

/// Records handed from a finished assessment to later flows.
#[derive(Clone)]
pub struct HandoffRepository {
    store: Arc<dyn KeyValueStore>,
    max_age: SignedDuration,
}

impl HandoffRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            max_age: RECENT_MAX_AGE,
        }
    }

    pub fn with_max_age(mut self, max_age: SignedDuration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn record_completed(
        &self,
        session: Uuid,
        assessment: &CompletedAssessment,
    ) -> Result<(), StorageError> {
        let key = store_keys::patient_constitution(session);
        save_state(self.store.as_ref(), &key, assessment)?;
        tracing::info!(%session, constitution = %assessment.result.label, "assessment stored");
        Ok(())
    }

    pub fn latest_completed(&self, session: Uuid) -> Result<Option<CompletedAssessment>, StorageError> {
        let key = store_keys::patient_constitution(session);
        let loaded = load_state_opt::<CompletedAssessment>(self.store.as_ref(), &key)?;
        Ok(loaded.map(|(assessment, _)| assessment))
    }

    pub fn record_recent(&self, session: Uuid, patient: &RecentPatient) -> Result<(), StorageError> {
        let key = store_keys::recently_created_patient(session);
        save_state(self.store.as_ref(), &key, patient)?;
        tracing::info!(%session, patient_id = %patient.id, "recent patient recorded");
        Ok(())
    }

    /// Consume the recent-patient record.
    ///
    /// The record is removed whether it is fresh, stale or unreadable; only a
    /// fresh one is returned. When two callers race, only the one whose
    /// removal succeeds gets the record.
    pub fn take_recent(&self, session: Uuid, now: Timestamp) -> Result<Option<RecentPatient>, StorageError> {
        let key = store_keys::recently_created_patient(session);
        let object = match self.store.get(&key) {
            Ok(object) => object,
            Err(StorageError::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        match self.store.remove_if_match(&key, &object.etag) {
            Ok(()) => {}
            Err(e) if e.is_conflict() => {
                tracing::debug!(%session, "recent patient already consumed");
                return Ok(None);
            }
            Err(e) => return Err(e),
        }

        let patient = match serde_json::from_slice::<RecentPatient>(&object.body) {
            Ok(patient) => patient,
            Err(e) => {
                tracing::warn!(%session, error = %e, "discarding unreadable recent patient");
                return Ok(None);
            }
        };
        if !is_fresh(patient.created_at, now, self.max_age) {
            tracing::debug!(%session, created_at = %patient.created_at, "recent patient expired");
            return Ok(None);
        }
        Ok(Some(patient))
    }
}
