use crate::errors::StorageError;
use serde::{Serialize, de::DeserializeOwned};
use std::{collections::BTreeMap, path::Path};
use tokio::fs;
use tracing::{error, warn};

pub const EXERCISES_KEY: &str = "exercises";
pub const COMPLETED_DATES_KEY: &str = "completedDates";
pub const HISTORY_KEY: &str = "historyCompletedWorkouts";

/// Synchronous string key-value boundary the views persist through.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// In-memory key-value area, flushed to a single JSON file by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageArea {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl StorageArea {
    pub fn new(quota: Option<usize>) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota,
        }
    }

    pub fn with_entries(entries: BTreeMap<String, String>, quota: Option<usize>) -> Self {
        Self { entries, quota }
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Bytes used by keys and values together.
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for StorageArea {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Reads one slice; an absent key or malformed JSON yields the default.
pub fn read_slice<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, "discarding malformed stored value: {err}");
            T::default()
        }
    }
}

/// Writes one slice. Failures are logged and swallowed; the caller keeps its
/// in-memory state either way.
pub fn write_slice<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|payload| store.set(key, payload));
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(key, "failed to persist value: {err}");
            false
        }
    }
}

pub async fn load_area(path: &Path, quota: Option<usize>) -> StorageArea {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => StorageArea::with_entries(entries, quota),
            Err(err) => {
                error!("failed to parse data file: {err}");
                StorageArea::new(quota)
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StorageArea::new(quota),
        Err(err) => {
            error!("failed to read data file: {err}");
            StorageArea::new(quota)
        }
    }
}

pub async fn persist_area(path: &Path, area: &StorageArea) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(area.entries())?;
    fs::write(path, payload).await?;
    Ok(())
}
