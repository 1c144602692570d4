//! Inventory service: lookup, filtering, creation, edit, archive-delete.

use tracing::{debug, info};

use stockroom_store::CollectionStore;

use crate::config::CollectionNames;
use crate::error::{InventoryError, InventoryResult};
use crate::item::{CreateItem, Item, new_uuid};

/// Business layer over a collection store.
///
/// The store owns the canonical in-memory array for each named collection;
/// the service keeps no copy of its own and re-fetches the live handle on
/// every operation, so it always observes the current state. Lookups are
/// linear scans in storage order.
pub struct InventoryService<S> {
    store: S,
    names: CollectionNames,
}

impl<S> InventoryService<S>
where
    S: CollectionStore<Item>,
{
    /// Service over `store` with the default collection names.
    pub fn new(store: S) -> Self {
        Self::with_names(store, CollectionNames::default())
    }

    /// Service over `store` with explicit collection names.
    pub fn with_names(store: S, names: CollectionNames) -> Self {
        Self { store, names }
    }

    /// First active item whose uuid equals `uuid`, if any.
    ///
    /// An unknown uuid is not an error; it yields `None`.
    pub fn get_item(&self, uuid: &str) -> InventoryResult<Option<Item>> {
        let items = self.store.get_collection(&self.names.items)?;
        let records = items.records()?;
        Ok(records.iter().find(|item| item.uuid == uuid).cloned())
    }

    /// Every active item whose category equals `category`, in storage order.
    ///
    /// An unmatched category is not an error; it yields an empty vec.
    pub fn get_items(&self, category: &str) -> InventoryResult<Vec<Item>> {
        let items = self.store.get_collection(&self.names.items)?;
        let records = items.records()?;
        Ok(records
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect())
    }

    /// Append a new item to the active collection and persist it.
    ///
    /// The uuid is always freshly assigned here; the created record is
    /// returned with it populated.
    pub fn create_item(&self, params: CreateItem) -> InventoryResult<Item> {
        let item = Item {
            uuid: new_uuid(),
            name: params.name,
            category: params.category,
            count: params.count,
        };

        let items = self.store.get_collection(&self.names.items)?;
        items.records_mut()?.push(item.clone());
        self.store.write(&self.names.items)?;

        info!(uuid = %item.uuid, category = %item.category, "created item");
        Ok(item)
    }

    /// Overwrite every field of the active record matching `params.uuid`.
    ///
    /// Full replace, not a merge: the stored record becomes `params`, uuid
    /// included. Errors with [`InventoryError::ImproperUuid`] when no
    /// active record has that uuid; nothing is created in that case.
    pub fn edit_item(&self, params: Item) -> InventoryResult<Item> {
        let items = self.store.get_collection(&self.names.items)?;

        {
            let mut records = items.records_mut()?;
            let record = records
                .iter_mut()
                .find(|item| item.uuid == params.uuid)
                .ok_or(InventoryError::ImproperUuid)?;
            *record = params.clone();
        }
        self.store.write(&self.names.items)?;

        debug!(uuid = %params.uuid, "edited item");
        Ok(params)
    }

    /// Move the active record with `uuid` to the deleted-items archive.
    ///
    /// The record is removed from the active collection at its position and
    /// appended, unchanged, to the archive; both collections are persisted.
    /// Errors with [`InventoryError::ImproperUuid`] when no active record
    /// has that uuid, leaving both collections untouched. There is no
    /// reverse path: archived records stay archived.
    pub fn delete_item(&self, uuid: &str) -> InventoryResult<()> {
        let items = self.store.get_collection(&self.names.items)?;

        let removed = {
            let mut records = items.records_mut()?;
            let position = records
                .iter()
                .position(|item| item.uuid == uuid)
                .ok_or(InventoryError::ImproperUuid)?;
            records.remove(position)
        };
        self.store.write(&self.names.items)?;

        let archive = self.store.get_collection(&self.names.deleted_items)?;
        archive.records_mut()?.push(removed);
        self.store.write(&self.names.deleted_items)?;

        info!(uuid = %uuid, "archived item");
        Ok(())
    }
}
