use serde::{Deserialize, Serialize};

use cantina_core::{Entity, InventoryId, ProductId, Quantity};

/// Current on-hand stock for exactly one product.
///
/// Uniqueness (at most one row per product) is an invariant of the store,
/// not of this struct; `InventoryStore::ensure` is the only sanctioned way
/// to bring a row into existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

impl Entity for InventoryRow {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
