//! Disk-backed service flows over the JSON flat-file store.
//!
//! Each test reopens a fresh store over the same directory to check that
//! what the service persisted is what a new process would observe.

use std::path::Path;

use stockroom_inventory::{CreateItem, InventoryError, InventoryService, Item};
use stockroom_store::{CollectionStore, JsonFileStore};

fn service_at(dir: &Path) -> InventoryService<JsonFileStore<Item>> {
    stockroom_observability::init();
    InventoryService::new(JsonFileStore::new(dir))
}

fn create(service: &InventoryService<JsonFileStore<Item>>, name: &str, category: &str, count: u64) -> Item {
    service
        .create_item(CreateItem {
            name: name.to_string(),
            category: category.to_string(),
            count,
        })
        .unwrap()
}

#[test]
fn created_items_survive_a_store_restart() {
    let dir = tempfile::tempdir().unwrap();

    let service = service_at(dir.path());
    let item = create(&service, "banana", "fruit", 20);

    let reopened = service_at(dir.path());
    assert_eq!(reopened.get_item(&item.uuid).unwrap(), Some(item));
}

#[test]
fn edits_are_durable_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let service = service_at(dir.path());
    let mut item = create(&service, "banana", "fruit", 20);
    item.name = "grapes".to_string();
    item.count = 30;
    service.edit_item(item.clone()).unwrap();

    let reopened = service_at(dir.path());
    assert_eq!(reopened.get_item(&item.uuid).unwrap(), Some(item));
}

#[test]
fn delete_persists_both_collections() {
    let dir = tempfile::tempdir().unwrap();

    let service = service_at(dir.path());
    let item = create(&service, "banana", "fruit", 20);
    service.delete_item(&item.uuid).unwrap();

    let reopened = service_at(dir.path());
    assert_eq!(reopened.get_item(&item.uuid).unwrap(), None);

    let store: JsonFileStore<Item> = JsonFileStore::new(dir.path());
    let archive = store.get_collection("deleted_items").unwrap();
    assert_eq!(*archive.records().unwrap(), vec![item]);
}

#[test]
fn mutating_an_unknown_uuid_leaves_the_files_alone() {
    let dir = tempfile::tempdir().unwrap();

    let service = service_at(dir.path());
    let item = create(&service, "banana", "fruit", 20);

    let err = service.delete_item("test_uuid").unwrap_err();
    assert!(matches!(err, InventoryError::ImproperUuid));

    let reopened = service_at(dir.path());
    assert_eq!(reopened.get_items("fruit").unwrap(), vec![item]);
    assert!(!dir.path().join("deleted_items.json").exists());
}

#[test]
fn fruit_and_furniture_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(dir.path());

    let banana = create(&service, "banana", "fruit", 20);
    let lychee = create(&service, "lychee", "fruit", 10);
    let couch = create(&service, "couch", "furniture", 7);

    assert_eq!(
        service.get_items("fruit").unwrap(),
        vec![banana.clone(), lychee.clone()]
    );

    service.delete_item(&banana.uuid).unwrap();

    let reopened = service_at(dir.path());
    assert_eq!(reopened.get_items("fruit").unwrap(), vec![lychee.clone()]);
    assert_eq!(reopened.get_items("furniture").unwrap(), vec![couch.clone()]);

    let store: JsonFileStore<Item> = JsonFileStore::new(dir.path());
    let archive = store.get_collection("deleted_items").unwrap();
    assert_eq!(*archive.records().unwrap(), vec![banana]);
}
