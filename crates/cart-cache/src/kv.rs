//! Key-Value store wrapper with automatic serialization.

use crate::backend::{Backend, FileBackend, MemoryBackend};
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

/// Type-safe cache over a byte [`Backend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<B> {
    backend: B,
}

impl Cache<MemoryBackend> {
    /// Open an empty in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl Cache<FileBackend> {
    /// Open a cache persisted under a directory.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open_dir(".cart")?;
    /// ```
    pub fn open_dir(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileBackend::open(root)?))
    }
}

impl<B: Backend> Cache<B> {
    /// Wrap an existing backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::SerializeError`] if the stored bytes don't decode as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing whatever the slot held.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Write raw bytes into a slot without serialization.
    pub fn set_raw(&mut self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        self.backend.set(key, bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.backend.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut cache = Cache::in_memory();
        let entries = vec![
            Entry { id: "a".into(), quantity: 2 },
            Entry { id: "b".into(), quantity: 1 },
        ];
        cache.set("cart", &entries).unwrap();

        let loaded: Vec<Entry> = cache.get("cart").unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::in_memory();
        let loaded: Option<Vec<Entry>> = cache.get("cart").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_bytes_report_serialize_error() {
        let mut cache = Cache::in_memory();
        cache.set_raw("cart", b"not json").unwrap();

        let err = cache.get::<Vec<Entry>>("cart").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_wrong_shape_reports_serialize_error() {
        let mut cache = Cache::in_memory();
        cache.set_raw("cart", br#"{"id":"a"}"#).unwrap();

        let err = cache.get::<Vec<Entry>>("cart").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_delete() {
        let mut cache = Cache::in_memory();
        cache.set("cart", &Vec::<Entry>::new()).unwrap();
        assert!(cache.exists("cart").unwrap());
        cache.delete("cart").unwrap();
        assert!(!cache.exists("cart").unwrap());
    }

    #[test]
    fn test_file_cache_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut cache = Cache::open_dir(dir.path()).unwrap();
            cache
                .set("cart", &vec![Entry { id: "a".into(), quantity: 3 }])
                .unwrap();
        }
        let cache = Cache::open_dir(dir.path()).unwrap();
        let loaded: Vec<Entry> = cache.get("cart").unwrap().unwrap();
        assert_eq!(loaded[0].quantity, 3);
    }
}
