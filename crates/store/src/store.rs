//! Named-collection persistence contract.

use std::sync::Arc;

use crate::collection::Collection;
use crate::error::StoreError;

/// Named-collection store.
///
/// A store owns the canonical in-memory array for each named collection and
/// is the only component that touches persistent storage. The contract has
/// two operations:
///
/// - [`get_collection`](CollectionStore::get_collection) returns a live
///   handle to the named collection, loading it from persistent storage on
///   first access. Every call for the same name yields handles onto the
///   same array.
/// - [`write`](CollectionStore::write) flushes that collection's current
///   in-memory state wholesale. Durability is the caller's responsibility:
///   mutate through the handle, then `write` the same name.
///
/// There is no transactionality across the two calls. If a `write` fails
/// after a mutation, the in-memory array and persistent storage diverge and
/// the store does not detect or repair that.
pub trait CollectionStore<R>: Send + Sync {
    /// Live handle to the named collection, loading it on first access.
    fn get_collection(&self, name: &str) -> Result<Collection<R>, StoreError>;

    /// Flush the named collection's in-memory state to persistent storage.
    ///
    /// Errors with [`StoreError::UnknownCollection`] when `name` was never
    /// fetched through [`get_collection`](CollectionStore::get_collection).
    fn write(&self, name: &str) -> Result<(), StoreError>;
}

impl<R, S> CollectionStore<R> for Arc<S>
where
    S: CollectionStore<R> + ?Sized,
{
    fn get_collection(&self, name: &str) -> Result<Collection<R>, StoreError> {
        (**self).get_collection(name)
    }

    fn write(&self, name: &str) -> Result<(), StoreError> {
        (**self).write(name)
    }
}
