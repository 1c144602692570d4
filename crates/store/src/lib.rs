//! `stockroom-store` — named, persisted JSON record collections.
//!
//! A store owns one ordered array of records per collection name. Callers
//! fetch a live [`Collection`] handle, mutate the array through it, and ask
//! the store to [`write`](CollectionStore::write) that collection back to
//! persistent storage wholesale. [`JsonFileStore`] keeps one JSON file per
//! collection; [`MemoryStore`] backs tests and dev setups.

pub mod collection;
pub mod error;
pub mod json_file;
pub mod memory;
pub mod store;

pub use collection::Collection;
pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::CollectionStore;
