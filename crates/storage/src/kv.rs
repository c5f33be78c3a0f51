use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use serde::{Serialize, de::DeserializeOwned};

/// String key-value storage in the spirit of browser local storage.
///
/// Values are JSON documents encoded as strings. Writes are last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> plateup_shared::Result<Option<String>>;
    fn set(&self, key: &str, value: String) -> plateup_shared::Result<()>;
    fn remove(&self, key: &str) -> plateup_shared::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> plateup_shared::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> plateup_shared::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> plateup_shared::Result<()> {
        (**self).remove(key)
    }
}

/// Reads and decodes `key`. Missing and undecodable values both read as
/// `None`.
pub fn read_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> plateup_shared::Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring corrupt stored value");
            Ok(None)
        }
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> plateup_shared::Result<()> {
    store.set(key, serde_json::to_string(value)?)
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> plateup_shared::Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> plateup_shared::Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value);

        Ok(())
    }

    fn remove(&self, key: &str) -> plateup_shared::Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);

        Ok(())
    }
}

/// Keeps every key in one JSON object on disk.
///
/// The file is read on each access so separate processes see each other's
/// writes. A missing file or one that does not hold a JSON object behaves
/// as an empty store. Other I/O failures are returned as errors.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> plateup_shared::Result<BTreeMap<String, String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "storage file is corrupt, starting empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> plateup_shared::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> plateup_shared::Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: String) -> plateup_shared::Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), value);

        self.save(&entries)
    }

    fn remove(&self, key: &str) -> plateup_shared::Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }

        Ok(())
    }
}
