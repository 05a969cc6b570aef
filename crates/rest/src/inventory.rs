//! Inventory store over `GET/POST /inventory` and `PUT /inventory/{id}`.

use async_trait::async_trait;

use cantina_core::{DomainError, InventoryId, ProductId, Quantity, StoreError, StoreResult};
use cantina_inventory::{InventoryRow, InventoryStore};

use crate::dto::{CreateInventoryDto, InventoryDto, UpdateInventoryDto};
use crate::http::RestClient;

pub struct RestInventory {
    client: RestClient,
}

impl RestInventory {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    async fn fetch_all(&self) -> StoreResult<Vec<InventoryRow>> {
        let dtos: Vec<InventoryDto> = self.client.get_json("/inventory").await?;
        Ok(dtos.into_iter().map(InventoryRow::from).collect())
    }

    async fn find_by_product(&self, product_id: ProductId) -> StoreResult<Option<InventoryRow>> {
        Ok(self
            .fetch_all()
            .await?
            .into_iter()
            .find(|row| row.product_id == product_id))
    }
}

#[async_trait]
impl InventoryStore for RestInventory {
    async fn list(&self) -> StoreResult<Vec<InventoryRow>> {
        self.fetch_all().await
    }

    async fn get(&self, product_id: ProductId) -> StoreResult<InventoryRow> {
        self.find_by_product(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found().into())
    }

    async fn ensure(&self, product_id: ProductId) -> StoreResult<InventoryRow> {
        let body = CreateInventoryDto {
            producto_id: product_id.as_i64(),
            cantidad_actual: 0.0,
        };
        match self.client.post_json::<_, InventoryDto>("/inventory", &body).await {
            Ok(dto) => Ok(dto.into()),
            // Row already exists: resolve the conflict by returning it,
            // never by swallowing the error into a fabricated row.
            Err(StoreError::Domain(DomainError::Conflict(_))) => self
                .find_by_product(product_id)
                .await?
                .ok_or_else(|| DomainError::not_found().into()),
            Err(e) => Err(e),
        }
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

        // The backend's PUT carries no precondition, so the optimistic
        // check is a read-then-write here. Not atomic; it narrows the race
        // window rather than closing it, which is the best this contract
        // allows.
        if let Some(expected) = expected_prior {
            let current = self
                .fetch_all()
                .await?
                .into_iter()
                .find(|row| row.id == id)
                .ok_or(DomainError::NotFound)?;
            if current.quantity != expected {
                return Err(DomainError::conflict(format!(
                    "expected prior quantity {expected}, found {}",
                    current.quantity
                ))
                .into());
            }
        }

        let body = UpdateInventoryDto {
            cantidad_actual: quantity,
        };
        let dto: InventoryDto = self
            .client
            .put_json(&format!("/inventory/{id}"), &body)
            .await?;
        Ok(dto.into())
    }
}
