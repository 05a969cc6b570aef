//! In-memory store implementations.
//!
//! Intended for tests/dev and offline use. Not optimized for performance;
//! every store is a `RwLock`'d map with monotonic id assignment, honoring
//! the same contracts the REST-backed stores do.

pub mod catalog;
pub mod inventory;
pub mod ledger;

pub use catalog::InMemoryCatalog;
pub use inventory::InMemoryInventory;
pub use ledger::InMemoryLedger;
