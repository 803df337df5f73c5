use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON record from the store. Returns the deserialized value and its
/// ETag.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<(T, String), StorageError> {
    let object = store.get(key)?;
    let value: T = serde_json::from_slice(&object.body)?;
    Ok((value, object.etag))
}

/// Load a JSON record, treating a missing key as `None`.
pub fn load_state_opt<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<(T, String)>, StorageError> {
    match load_state(store, key) {
        Ok(loaded) => Ok(Some(loaded)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON record to the store. Returns the new ETag.
pub fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body)
}

/// Save a JSON record with ETag optimistic locking. `None` requires that no
/// record exists yet.
pub fn save_state_if_match<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
    expected_etag: Option<&str>,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put_if_match(key, body, expected_etag)
}

/// Whether a record stamped at `stamped` is still younger than `max_age`.
pub fn is_fresh(stamped: jiff::Timestamp, now: jiff::Timestamp, max_age: jiff::SignedDuration) -> bool {
    now.duration_since(stamped) < max_age
}
