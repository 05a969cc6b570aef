use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use cantina_core::{DomainError, InventoryId, ProductId, Quantity, StoreError, StoreResult};
use cantina_inventory::{InventoryRow, InventoryStore};

/// In-memory inventory store.
///
/// The product → row map is the uniqueness invariant: `ensure` runs its
/// lookup and insert under one write lock, so two concurrent callers for
/// the same product always land on the same row.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    inner: RwLock<InventoryState>,
}

#[derive(Debug, Default)]
struct InventoryState {
    by_product: BTreeMap<ProductId, InventoryRow>,
    next_id: i64,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>() -> Result<T, StoreError> {
    Err(StoreError::transport("inventory lock poisoned"))
}

#[async_trait]
impl InventoryStore for InMemoryInventory {
    async fn list(&self) -> StoreResult<Vec<InventoryRow>> {
        let Ok(state) = self.inner.read() else {
            return poisoned();
        };
        Ok(state.by_product.values().cloned().collect())
    }

    async fn get(&self, product_id: ProductId) -> StoreResult<InventoryRow> {
        let Ok(state) = self.inner.read() else {
            return poisoned();
        };
        state
            .by_product
            .get(&product_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }

    async fn ensure(&self, product_id: ProductId) -> StoreResult<InventoryRow> {
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        if let Some(row) = state.by_product.get(&product_id) {
            return Ok(row.clone());
        }
        state.next_id += 1;
        let row = InventoryRow {
            id: InventoryId::new(state.next_id),
            product_id,
            quantity: 0.0,
        };
        state.by_product.insert(product_id, row.clone());
        Ok(row)
    }

    async fn set_quantity(
        &self,
        id: InventoryId,
        quantity: Quantity,
        expected_prior: Option<Quantity>,
    ) -> StoreResult<InventoryRow> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(DomainError::validation("quantity must be non-negative").into());
        }
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        let row = state
            .by_product
            .values_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::NotFound)?;
        if let Some(expected) = expected_prior {
            if row.quantity != expected {
                return Err(DomainError::conflict(format!(
                    "expected prior quantity {expected}, found {}",
                    row.quantity
                ))
                .into());
            }
        }
        row.quantity = quantity;
        Ok(row.clone())
    }
}
