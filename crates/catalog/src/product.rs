use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cantina_core::{DomainError, DomainResult, Entity, ProductId, Quantity, quantity};

/// Catalog entry for one stocked product.
///
/// On-hand quantity deliberately lives elsewhere (the inventory row); the
/// catalog only knows the threshold below which stock counts as low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    /// Minimum acceptable on-hand quantity; at or below it the product is
    /// flagged low-stock.
    pub min_stock: Quantity,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Low-stock rule: on-hand at or below the configured minimum.
    pub fn is_low_stock(&self, on_hand: Quantity) -> bool {
        on_hand <= self.min_stock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields required to create a product. The id and `updated_at` are assigned
/// by the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub min_stock: Quantity,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        quantity::ensure_non_negative("min_stock", self.min_stock)?;
        Ok(())
    }
}

/// Explicit update command enumerating the mutable fields of a product.
///
/// `None` means "leave unchanged". Unknown fields simply cannot be expressed,
/// which is the point: no loosely-typed partial object ever reaches a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Option<String>>,
    pub unit: Option<Option<String>>,
    pub min_stock: Option<Quantity>,
}

impl ProductPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }
        if let Some(min_stock) = self.min_stock {
            quantity::ensure_non_negative("min_stock", min_stock)?;
        }
        Ok(())
    }

    /// Apply the patch to an existing product, refreshing `updated_at`.
    pub fn apply_to(&self, product: &mut Product, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(unit) = &self.unit {
            product.unit = unit.clone();
        }
        if let Some(min_stock) = self.min_stock {
            product.min_stock = min_stock;
        }
        product.updated_at = now;
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.unit.is_none()
            && self.min_stock.is_none()
    }
}
