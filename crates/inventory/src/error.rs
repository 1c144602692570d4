//! Inventory error model.

use thiserror::Error;

use stockroom_store::StoreError;

/// Result type used across the inventory service.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory service operation error.
///
/// Read operations never use the error channel for a miss: `get_item`
/// returns `None` and `get_items` an empty vec. Only mutations on an
/// unknown uuid are errors, so callers can tell "edit target does not
/// exist" from a silent no-op.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The supplied uuid does not match any active item.
    #[error("Improper item uuid")]
    ImproperUuid,

    /// The backing collection store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
