//! Inventory store boundary.

use async_trait::async_trait;

use cantina_core::{InventoryId, ProductId, Quantity, StoreResult};

use crate::row::InventoryRow;

/// Persistence boundary for inventory rows.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<InventoryRow>>;

    /// Row for the given product, or `DomainError::NotFound`.
    async fn get(&self, product_id: ProductId) -> StoreResult<InventoryRow>;

    /// Get-or-create: returns the existing row, or a fresh one with
    /// quantity 0. Must never produce a second row for the same product,
    /// even when called concurrently; a duplicate-create conflict underneath
    /// resolves to the existing row rather than an error.
    async fn ensure(&self, product_id: ProductId) -> StoreResult<InventoryRow>;

    /// Write a new on-hand quantity.
    ///
    /// Rejects negative quantities with `DomainError::Validation`. When
    /// `expected_prior` is given and the stored quantity no longer matches,
    /// fails with `DomainError::Conflict` so the caller can retry from
    /// fresh state (optimistic concurrency).
    async fn set_quantity(
        &self,
        id: InventoryId,
        quantity: Quantity,
        expected_prior: Option<Quantity>,
    ) -> StoreResult<InventoryRow>;
}
