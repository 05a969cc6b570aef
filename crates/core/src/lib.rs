//! `cantina-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no transport concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, StoreError, StoreResult};
pub use id::{InventoryId, MoveId, ProductId, SupplierId, UserId};
pub use quantity::Quantity;
