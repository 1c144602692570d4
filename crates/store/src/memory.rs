//! In-memory collection store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::store::CollectionStore;

/// In-memory collection store for tests/dev.
///
/// Collections spring into existence empty on first access. `write` is a
/// no-op beyond the unknown-collection contract check, since the in-memory
/// array is already the only storage there is.
#[derive(Debug)]
pub struct MemoryStore<R> {
    collections: RwLock<HashMap<String, Collection<R>>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CollectionStore<R> for MemoryStore<R>
where
    R: Send + Sync + 'static,
{
    fn get_collection(&self, name: &str) -> Result<Collection<R>, StoreError> {
        let mut map = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(Vec::new()))
            .clone())
    }

    fn write(&self, name: &str) -> Result<(), StoreError> {
        let map = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        if map.contains_key(name) {
            Ok(())
        } else {
            Err(StoreError::UnknownCollection(name.to_string()))
        }
    }
}
