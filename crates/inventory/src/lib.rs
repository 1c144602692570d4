//! `stockroom-inventory` — inventory business layer.
//!
//! CRUD plus move-to-archive soft delete over two named collections: the
//! active items collection and a deleted-items archive, both held in a
//! `stockroom-store` collection store. The service is a thin layer: linear
//! scans for lookup and filtering, wholesale persists after every mutation,
//! no indexing and no cross-collection transactions.

pub mod config;
pub mod error;
pub mod item;
pub mod service;

pub use config::CollectionNames;
pub use error::{InventoryError, InventoryResult};
pub use item::{CreateItem, Item, ItemUuid};
pub use service::InventoryService;
