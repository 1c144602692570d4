//! Flat-file JSON collection store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::CollectionStore;

/// Flat-file JSON store: one `<name>.json` per collection under a base
/// directory, each file holding the serialized record array.
///
/// A collection loads lazily on first access and lives in memory
/// afterwards; a missing file loads as an empty array. `write` rewrites the
/// whole file from the current array. Nothing watches the files: an
/// external edit after a collection is loaded is invisible until the next
/// process start, and a failed `write` leaves memory and disk diverged.
#[derive(Debug)]
pub struct JsonFileStore<R> {
    dir: PathBuf,
    collections: RwLock<HashMap<String, Collection<R>>>,
}

impl<R> JsonFileStore<R> {
    /// Store rooted at `dir`. The directory is created on first `write`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl<R> JsonFileStore<R>
where
    R: DeserializeOwned,
{
    fn load(path: &Path) -> Result<Vec<R>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl<R> CollectionStore<R> for JsonFileStore<R>
where
    R: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn get_collection(&self, name: &str) -> Result<Collection<R>, StoreError> {
        if let Some(existing) = self
            .collections
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .get(name)
        {
            return Ok(existing.clone());
        }

        let records = Self::load(&self.file_path(name))?;
        debug!(collection = %name, records = records.len(), "loaded collection");

        let mut map = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        // A concurrent loader may have inserted first; keep whichever handle
        // landed so every caller shares one live array.
        Ok(map
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(records))
            .clone())
    }

    fn write(&self, name: &str) -> Result<(), StoreError> {
        let collection = self
            .collections
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))?;

        fs::create_dir_all(&self.dir)?;
        let records = collection.records()?;
        let bytes = serde_json::to_vec(&*records)?;
        fs::write(self.file_path(name), bytes)?;
        debug!(collection = %name, records = records.len(), "flushed collection");
        Ok(())
    }
}
