//! REST-backed store implementations.
//!
//! The backend speaks Spanish field names on the wire (`producto_id`,
//! `cantidad_actual`, `tipo`, ...); [`dto`] owns that translation so the
//! domain crates never see it. One [`RestClient`] is shared by all stores.

pub mod catalog;
pub mod config;
pub mod dto;
pub mod http;
pub mod inventory;
pub mod ledger;
pub mod suggest;

pub use catalog::RestCatalog;
pub use config::ClientConfig;
pub use http::RestClient;
pub use inventory::RestInventory;
pub use ledger::RestLedger;
pub use suggest::suggest_meal;
