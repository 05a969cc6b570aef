//! Catalog store over `GET/POST/PUT/DELETE /products`.

use async_trait::async_trait;

use cantina_catalog::{CatalogStore, NewProduct, Product, ProductPatch};
use cantina_core::{ProductId, StoreResult};

use crate::dto::{NewProductDto, ProductDto, ProductPatchDto};
use crate::http::RestClient;

pub struct RestCatalog {
    client: RestClient,
}

impl RestCatalog {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogStore for RestCatalog {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self.client.get_json("/products").await?;
        Ok(dtos.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: ProductId) -> StoreResult<Product> {
        let dto: ProductDto = self.client.get_json(&format!("/products/{id}")).await?;
        Ok(dto.into())
    }

    async fn create(&self, draft: NewProduct) -> StoreResult<Product> {
        draft.validate()?;
        let dto: ProductDto = self
            .client
            .post_json("/products", &NewProductDto::from(draft))
            .await?;
        Ok(dto.into())
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Product> {
        patch.validate()?;
        let dto: ProductDto = self
            .client
            .put_json(&format!("/products/{id}"), &ProductPatchDto::from(patch))
            .await?;
        Ok(dto.into())
    }

    async fn remove(&self, id: ProductId) -> StoreResult<()> {
        self.client.delete(&format!("/products/{id}")).await
    }
}
