//! Collection-name configuration.

use std::env;

/// Default name of the active items collection.
pub const DEFAULT_ITEMS_COLLECTION: &str = "items";

/// Default name of the deleted-items archive collection.
pub const DEFAULT_DELETED_ITEMS_COLLECTION: &str = "deleted_items";

const ITEMS_ENV: &str = "STOCKROOM_ITEMS_COLLECTION";
const DELETED_ITEMS_ENV: &str = "STOCKROOM_DELETED_ITEMS_COLLECTION";

/// Names of the two collections the service operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionNames {
    /// Active items collection.
    pub items: String,
    /// Archive of soft-deleted items. Append-only; never pruned.
    pub deleted_items: String,
}

impl CollectionNames {
    /// Collection names from `STOCKROOM_ITEMS_COLLECTION` /
    /// `STOCKROOM_DELETED_ITEMS_COLLECTION`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            items: lookup(ITEMS_ENV).unwrap_or_else(|| DEFAULT_ITEMS_COLLECTION.to_string()),
            deleted_items: lookup(DELETED_ITEMS_ENV)
                .unwrap_or_else(|| DEFAULT_DELETED_ITEMS_COLLECTION.to_string()),
        }
    }
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS_COLLECTION.to_string(),
            deleted_items: DEFAULT_DELETED_ITEMS_COLLECTION.to_string(),
        }
    }
}
