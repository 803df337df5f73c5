use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::error::StorageError;

/// A stored record and the ETag of its current contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub etag: String,
}

/// A durable key-value cache holding serialized records.
///
/// Every record carries an ETag derived from its contents. Conditional writes
/// compare it under the store's write lock, so a read-modify-write cycle can
/// detect a concurrent writer instead of overwriting it.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the record under `key`, or [`StorageError::NotFound`].
    fn get(&self, key: &str) -> Result<StoredObject, StorageError>;

    /// Store `body` under `key` unconditionally. Returns the new ETag.
    fn put(&self, key: &str, body: Vec<u8>) -> Result<String, StorageError>;

    /// Store `body` only if the current record matches `expected_etag`.
    ///
    /// `None` means the key must not exist yet. A record that changed fails
    /// with [`StorageError::ETagMismatch`]; one that appeared or vanished
    /// fails with [`StorageError::PreconditionFailed`].
    fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Delete `key` only if its record still matches `expected_etag`.
    fn remove_if_match(&self, key: &str, expected_etag: &str) -> Result<(), StorageError>;
}

/// ETag of a record body.
pub fn etag_of(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:016x}-{}\"", hasher.finish(), body.len())
}

fn check_etag(key: &str, current: Option<&[u8]>, expected: Option<&str>) -> Result<(), StorageError> {
    match (current, expected) {
        (None, None) => Ok(()),
        (Some(body), Some(expected)) => {
            let actual = etag_of(body);
            if actual == expected {
                Ok(())
            } else {
                Err(StorageError::ETagMismatch {
                    expected: expected.to_string(),
                    actual,
                })
            }
        }
        _ => Err(StorageError::PreconditionFailed {
            key: key.to_string(),
        }),
    }
}

/// Process-local store, used in tests and when no data directory is
/// configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<StoredObject, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        let body = entries.get(key).cloned().ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
        })?;
        Ok(StoredObject {
            etag: etag_of(&body),
            body,
        })
    }

    fn put(&self, key: &str, body: Vec<u8>) -> Result<String, StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        let etag = etag_of(&body);
        entries.insert(key.to_string(), body);
        Ok(etag)
    }

    fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        check_etag(key, entries.get(key).map(Vec::as_slice), expected_etag)?;
        let etag = etag_of(&body);
        entries.insert(key.to_string(), body);
        Ok(etag)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn remove_if_match(&self, key: &str, expected_etag: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        check_etag(key, entries.get(key).map(Vec::as_slice), Some(expected_etag))?;
        entries.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Writes from one `FileStore` (and its clones) are serialized by a shared
/// lock; separate processes sharing the directory are not coordinated.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| io_error(&dir, source))?;
        tracing::info!(dir = %dir.display(), "file store opened");
        Ok(Self {
            dir,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(io_error(path, source)),
        }
    }

    fn write(&self, key: &str, path: &Path, body: &[u8]) -> Result<String, StorageError> {
        // Write to a temp file then rename so readers never see a partial record.
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, body).map_err(|source| io_error(&tmp_path, source))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .map_err(|source| io_error(&tmp_path, source))?;
        }

        std::fs::rename(&tmp_path, path).map_err(|source| io_error(path, source))?;
        tracing::debug!(key, bytes = body.len(), "record written");
        Ok(etag_of(body))
    }

    fn delete(&self, key: &str, path: &Path) -> Result<(), StorageError> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(key, "record removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(io_error(path, source)),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<StoredObject, StorageError> {
        let path = self.path_for(key)?;
        let body = self.read(&path)?.ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
        })?;
        Ok(StoredObject {
            etag: etag_of(&body),
            body,
        })
    }

    fn put(&self, key: &str, body: Vec<u8>) -> Result<String, StorageError> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        self.write(key, &path, &body)
    }

    fn put_if_match(
        &self,
        key: &str,
        body: Vec<u8>,
        expected_etag: Option<&str>,
    ) -> Result<String, StorageError> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        check_etag(key, self.read(&path)?.as_deref(), expected_etag)?;
        self.write(key, &path, &body)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        self.delete(key, &path)
    }

    fn remove_if_match(&self, key: &str, expected_etag: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        check_etag(key, self.read(&path)?.as_deref(), Some(expected_etag))?;
        self.delete(key, &path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
