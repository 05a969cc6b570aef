//! Catalog store boundary.

use async_trait::async_trait;

use cantina_core::{ProductId, StoreResult};

use crate::product::{NewProduct, Product, ProductPatch};

/// Persistence boundary for products.
///
/// All operations are potentially network-latent. Implementations map their
/// transport failures into `StoreError::Transport` and domain outcomes
/// (missing id, duplicate) into the matching `DomainError`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<Product>>;

    /// Fails with `DomainError::NotFound` when no such product exists.
    async fn get(&self, id: ProductId) -> StoreResult<Product>;

    /// Creates a product; the store assigns the id and `updated_at`.
    async fn create(&self, draft: NewProduct) -> StoreResult<Product>;

    /// Applies an explicit patch to an existing product.
    async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Product>;

    /// Explicit delete. Cascade behavior is a workflow policy, not a store
    /// concern; this removes the catalog entry only.
    async fn remove(&self, id: ProductId) -> StoreResult<()>;
}
