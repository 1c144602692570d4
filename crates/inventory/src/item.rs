//! Item record and creation parameters.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Item identifier, kept in its canonical hyphenated string form.
///
/// Assigned by the service at creation time from a 128-bit random UUID;
/// callers never pick identifiers.
pub type ItemUuid = String;

/// Mint a fresh random item uuid.
pub(crate) fn new_uuid() -> ItemUuid {
    Uuid::new_v4().to_string()
}

/// One inventory record as persisted in a collection.
///
/// The serialized shape is exactly `{uuid, name, category, count}`. `count`
/// is non-negative by construction; anything that is not a non-negative
/// integer on the wire deserializes to zero instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub uuid: ItemUuid,
    pub name: String,
    /// Grouping/filter key for [`get_items`](crate::InventoryService::get_items).
    pub category: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

/// Parameters for [`create_item`](crate::InventoryService::create_item).
///
/// Carries no uuid field: the service assigns one, independent of anything
/// the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub category: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

/// Deserialize a count from arbitrary JSON, coercing anything that is not a
/// non-negative integer to zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or(0))
}
