use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use prakriti_core::models::progress::ProgressSnapshot;
use prakriti_core::store_keys;

use crate::error::StorageError;
use crate::state::{is_fresh, save_state, save_state_if_match};
use crate::store::KeyValueStore;

/// Saved progress older than this is discarded on load.
pub const PROGRESS_MAX_AGE: SignedDuration = SignedDuration::from_secs(24 * 60 * 60);

/// Conditional writes attempted by [`ProgressRepository::update`] before it
/// gives up with [`StorageError::Contended`].
pub const MAX_UPDATE_ATTEMPTS: usize = 64;

/// What the store currently holds for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    /// The snapshot, if the record is readable and inside the resume window.
    pub snapshot: Option<ProgressSnapshot>,
    /// ETag of the stored record, even when it is stale or unreadable.
    pub etag: Option<String>,
}

/// Autosave and resume for in-flight assessments.
#[derive(Clone)]
pub struct ProgressRepository {
    store: Arc<dyn KeyValueStore>,
    max_age: SignedDuration,
}

impl ProgressRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            max_age: PROGRESS_MAX_AGE,
        }
    }

    pub fn with_max_age(mut self, max_age: SignedDuration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Overwrite the saved progress. Returns the new ETag.
    pub fn save(&self, session: Uuid, snapshot: &ProgressSnapshot) -> Result<String, StorageError> {
        let etag = save_state(self.store.as_ref(), &store_keys::progress(session), snapshot)?;
        tracing::debug!(%session, question_index = snapshot.question_index, "progress saved");
        Ok(etag)
    }

    /// Overwrite the saved progress only if it still has `expected_etag`.
    pub fn save_if_match(
        &self,
        session: Uuid,
        snapshot: &ProgressSnapshot,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError> {
        let key = store_keys::progress(session);
        let etag = save_state_if_match(self.store.as_ref(), &key, snapshot, expected_etag)?;
        tracing::debug!(%session, question_index = snapshot.question_index, "progress saved");
        Ok(etag)
    }

    /// The saved snapshot, if one exists and was saved less than the resume
    /// window before `now`. Unreadable records count as absent.
    pub fn load(&self, session: Uuid, now: Timestamp) -> Result<Option<ProgressSnapshot>, StorageError> {
        Ok(self.load_record(session, now)?.snapshot)
    }

    /// Like [`load`](Self::load), also returning the ETag of whatever is
    /// stored so a later conditional write can replace it.
    pub fn load_record(&self, session: Uuid, now: Timestamp) -> Result<ProgressRecord, StorageError> {
        let object = match self.store.get(&store_keys::progress(session)) {
            Ok(object) => object,
            Err(StorageError::NotFound { .. }) => {
                return Ok(ProgressRecord {
                    snapshot: None,
                    etag: None,
                });
            }
            Err(e) => return Err(e),
        };

        let snapshot = match serde_json::from_slice::<ProgressSnapshot>(&object.body) {
            Ok(snapshot) if is_fresh(snapshot.saved_at, now, self.max_age) => Some(snapshot),
            Ok(snapshot) => {
                tracing::debug!(%session, saved_at = %snapshot.saved_at, "progress expired");
                None
            }
            Err(e) => {
                tracing::warn!(%session, error = %e, "discarding unreadable progress");
                None
            }
        };
        Ok(ProgressRecord {
            snapshot,
            etag: Some(object.etag),
        })
    }

    /// Read-modify-write of the saved progress.
    ///
    /// `apply` receives the current snapshot (or a fresh one stamped `now`)
    /// and the result is written only if nobody else wrote in between. On a
    /// conflict the cycle is repeated with the newer snapshot, so `apply` may
    /// run more than once.
    pub fn update<T, E>(
        &self,
        session: Uuid,
        now: Timestamp,
        mut apply: impl FnMut(&mut ProgressSnapshot) -> Result<T, E>,
    ) -> Result<(ProgressSnapshot, T), E>
    where
        E: From<StorageError>,
    {
        for attempt in 1..=MAX_UPDATE_ATTEMPTS {
            let current = self.load_record(session, now)?;
            let mut snapshot = current
                .snapshot
                .unwrap_or_else(|| ProgressSnapshot::new(now));
            let output = apply(&mut snapshot)?;

            match self.save_if_match(session, &snapshot, current.etag.as_deref()) {
                Ok(_) => return Ok((snapshot, output)),
                Err(e) if e.is_conflict() => {
                    tracing::debug!(%session, attempt, "progress changed concurrently, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::warn!(%session, attempts = MAX_UPDATE_ATTEMPTS, "progress update abandoned");
        Err(StorageError::Contended {
            key: store_keys::progress(session),
            attempts: MAX_UPDATE_ATTEMPTS,
        }
        .into())
    }

    pub fn clear(&self, session: Uuid) -> Result<(), StorageError> {
        self.store.remove(&store_keys::progress(session))?;
        tracing::debug!(%session, "progress cleared");
        Ok(())
    }

    /// Remove the saved progress only if it still has `expected_etag`.
    pub fn clear_if_match(&self, session: Uuid, expected_etag: &str) -> Result<(), StorageError> {
        self.store
            .remove_if_match(&store_keys::progress(session), expected_etag)?;
        tracing::debug!(%session, "progress cleared");
        Ok(())
    }
}
