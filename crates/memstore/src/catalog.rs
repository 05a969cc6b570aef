use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use cantina_catalog::{CatalogStore, NewProduct, Product, ProductPatch};
use cantina_core::{DomainError, ProductId, StoreError, StoreResult};

/// In-memory catalog store.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<CatalogState>,
}

#[derive(Debug, Default)]
struct CatalogState {
    products: BTreeMap<ProductId, Product>,
    next_id: i64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>() -> Result<T, StoreError> {
    Err(StoreError::transport("catalog lock poisoned"))
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let Ok(state) = self.inner.read() else {
            return poisoned();
        };
        Ok(state.products.values().cloned().collect())
    }

    async fn get(&self, id: ProductId) -> StoreResult<Product> {
        let Ok(state) = self.inner.read() else {
            return poisoned();
        };
        state
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }

    async fn create(&self, draft: NewProduct) -> StoreResult<Product> {
        draft.validate()?;
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        state.next_id += 1;
        let product = Product {
            id: ProductId::new(state.next_id),
            name: draft.name,
            category: draft.category,
            unit: draft.unit,
            min_stock: draft.min_stock,
            updated_at: Utc::now(),
        };
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Product> {
        patch.validate()?;
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        let product = state
            .products
            .get_mut(&id)
            .ok_or(DomainError::NotFound)?;
        patch.apply_to(product, Utc::now());
        Ok(product.clone())
    }

    async fn remove(&self, id: ProductId) -> StoreResult<()> {
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        state
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found().into())
    }
}
