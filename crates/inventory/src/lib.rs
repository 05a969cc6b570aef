//! Inventory domain module.
//!
//! One row per product carrying the current on-hand quantity, plus the
//! [`InventoryStore`] boundary with an idempotent ensure and an optimistic
//! quantity write.

pub mod row;
pub mod store;

pub use row::InventoryRow;
pub use store::InventoryStore;
