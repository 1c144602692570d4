//! Live handle to one named collection's backing array.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;

/// Handle to the in-memory backing array of one named collection.
///
/// The owning store hands out clones of the same handle for the same name,
/// so a mutation through any handle is visible to every other handle and to
/// the store's next `write`. The store, not the caller, owns the canonical
/// array; callers should re-fetch the handle per operation rather than hold
/// a long-lived copy.
#[derive(Debug)]
pub struct Collection<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> Collection<R> {
    pub(crate) fn new(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Read access to the backing array.
    pub fn records(&self) -> Result<RwLockReadGuard<'_, Vec<R>>, StoreError> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    /// Write access to the backing array.
    ///
    /// The guard must be dropped before asking the store to `write` the
    /// collection, or the flush will deadlock on the same lock.
    pub fn records_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<R>>, StoreError> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}
