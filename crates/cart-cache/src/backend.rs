//! Raw byte backends for the cache.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::CacheError;

/// Extension used for slot files on disk.
const SLOT_EXTENSION: &str = "json";

/// A key-value store of opaque byte slots.
///
/// Writes overwrite the previous content of a slot completely.
pub trait Backend {
    /// Read a slot. `None` if the key was never written or has been deleted.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Overwrite a slot.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove a slot. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), CacheError>;

    /// Check whether a slot exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys, sorted.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// In-process backend, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    slots: BTreeMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.slots.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.slots.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.slots.keys().cloned().collect())
    }
}

/// Directory-backed store: one `<key>.json` file per slot.
///
/// Writes go to a temporary sibling file first and are renamed into place,
/// so a crash mid-write leaves the previous content intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Directory holding the slot files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.slot_path(key)?;
        let tmp = path.with_extension(format!("{}.tmp", SLOT_EXTENSION));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::trace!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.slot_path(key)?.is_file())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Keys become file names, so they are restricted to a safe alphabet.
fn validate_key(key: &str) -> Result<(), CacheError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));
    if valid {
        Ok(())
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_set_get_delete() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("cart").unwrap(), None);

        backend.set("cart", b"[]").unwrap();
        assert_eq!(backend.get("cart").unwrap(), Some(b"[]".to_vec()));
        assert!(backend.exists("cart").unwrap());

        backend.delete("cart").unwrap();
        assert!(!backend.exists("cart").unwrap());
    }

    #[test]
    fn test_memory_set_overwrites() {
        let mut backend = MemoryBackend::new();
        backend.set("cart", b"first").unwrap();
        backend.set("cart", b"second").unwrap();
        assert_eq!(backend.get("cart").unwrap(), Some(b"second".to_vec()));
        assert_eq!(backend.keys().unwrap(), vec!["cart".to_string()]);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path().join("store")).unwrap();

        backend.set("cart", br#"[{"id":"a"}]"#).unwrap();
        assert_eq!(
            backend.get("cart").unwrap(),
            Some(br#"[{"id":"a"}]"#.to_vec())
        );
        assert!(dir.path().join("store").join("cart.json").is_file());
    }

    #[test]
    fn test_file_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get("cart").unwrap(), None);
        assert!(!backend.exists("cart").unwrap());
    }

    #[test]
    fn test_file_delete_absent_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path()).unwrap();
        backend.delete("cart").unwrap();
    }

    #[test]
    fn test_file_keys_ignore_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path()).unwrap();
        backend.set("wishlist", b"[]").unwrap();
        backend.set("cart", b"[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        assert_eq!(
            backend.keys().unwrap(),
            vec!["cart".to_string(), "wishlist".to_string()]
        );
    }

    #[test]
    fn test_file_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::open(dir.path()).unwrap();
        assert!(matches!(
            backend.set("../escape", b"x"),
            Err(CacheError::InvalidKey(_))
        ));
        assert!(matches!(backend.get(""), Err(CacheError::InvalidKey(_))));
    }
}
