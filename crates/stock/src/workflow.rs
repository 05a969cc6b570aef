//! Product save/remove reconciliation.
//!
//! A save touches three stores in a fixed causal order:
//!
//! 1. catalog create/update
//! 2. inventory ensure (row exists, read prior quantity)
//! 3. ledger append for the nonzero delta
//! 4. inventory quantity write, preconditioned on the prior quantity
//!
//! The ledger append always precedes the quantity write, so the on-hand
//! quantity can never advance without the movement that explains it. There
//! is no multi-store transaction behind the REST contract; if the quantity
//! write fails after an append, the appended move is compensated by an
//! administrative delete and the original error is surfaced.

use serde::{Deserialize, Serialize};

use cantina_catalog::{CatalogStore, NewProduct, Product, ProductPatch};
use cantina_core::{ProductId, Quantity, StoreResult, SupplierId, UserId, quantity};
use cantina_inventory::InventoryStore;
use cantina_ledger::{Delta, MoveFilter, MovementLedger, NewStockMove};
use std::sync::Arc;

/// User-submitted product form: a partial product plus the desired on-hand
/// quantity. Transient; it exists only between form open and save/cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// Absent for a create, present for an edit.
    pub id: Option<ProductId>,
    pub name: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub min_stock: Quantity,
    /// Declared on-hand quantity the stores must converge to.
    pub target_quantity: Quantity,
}

impl Draft {
    fn validate(&self) -> StoreResult<()> {
        let as_new = NewProduct {
            name: self.name.clone(),
            category: self.category.clone(),
            unit: self.unit.clone(),
            min_stock: self.min_stock,
        };
        as_new.validate()?;
        quantity::ensure_non_negative("target_quantity", self.target_quantity)?;
        Ok(())
    }

    fn as_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            category: self.category.clone(),
            unit: self.unit.clone(),
            min_stock: self.min_stock,
        }
    }

    fn as_patch(&self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name.clone()),
            category: Some(self.category.clone()),
            unit: Some(self.unit.clone()),
            min_stock: Some(self.min_stock),
        }
    }
}

/// Actor/supplier attribution for ledger entries produced by a save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveContext {
    pub actor: Option<UserId>,
    pub supplier: Option<SupplierId>,
}

/// What `remove` does beyond deleting the catalog entry.
///
/// The inventory row is orphaned under both policies: the backend exposes
/// no inventory delete, and an orphaned row is invisible to every read path
/// that joins through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovePolicy {
    /// Delete the catalog entry only (observed behavior of the source
    /// system).
    #[default]
    Orphan,
    /// Additionally delete the product's movement history.
    CascadeMoves,
}

/// Orchestrates writes across catalog, inventory and ledger.
pub struct StockService {
    catalog: Arc<dyn CatalogStore>,
    inventory: Arc<dyn InventoryStore>,
    ledger: Arc<dyn MovementLedger>,
    remove_policy: RemovePolicy,
}

impl StockService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        inventory: Arc<dyn InventoryStore>,
        ledger: Arc<dyn MovementLedger>,
    ) -> Self {
        Self {
            catalog,
            inventory,
            ledger,
            remove_policy: RemovePolicy::default(),
        }
    }

    pub fn with_remove_policy(mut self, policy: RemovePolicy) -> Self {
        self.remove_policy = policy;
        self
    }

    /// Save a draft, reconciling all three stores.
    ///
    /// On success: the product carries the submitted fields, the inventory
    /// row equals `target_quantity`, and the ledger grew by exactly one
    /// entry matching the quantity change (or by none for a zero delta).
    /// Any failure aborts the remaining steps; a failure after the ledger
    /// append compensates the append before returning.
    pub async fn save(&self, draft: Draft, ctx: SaveContext) -> StoreResult<Product> {
        draft.validate()?;

        let product = match draft.id {
            Some(id) => self.catalog.update(id, draft.as_patch()).await?,
            None => self.catalog.create(draft.as_new_product()).await?,
        };

        let row = self.inventory.ensure(product.id).await?;
        let delta = Delta::between(row.quantity, draft.target_quantity);

        let appended = match delta.movement() {
            Some((direction, qty)) => Some(
                self.ledger
                    .append(NewStockMove {
                        product_id: product.id,
                        direction,
                        quantity: qty,
                        actor: ctx.actor,
                        supplier: ctx.supplier,
                    })
                    .await?,
            ),
            None => None,
        };

        let write = self
            .inventory
            .set_quantity(row.id, draft.target_quantity, Some(row.quantity))
            .await;

        if let Err(err) = write {
            if let Some(entry) = appended {
                // Roll the orphaned movement back so the ledger does not
                // claim a quantity change that never landed.
                if let Err(comp_err) = self.ledger.remove(entry.id).await {
                    tracing::error!(
                        move_id = %entry.id,
                        error = %comp_err,
                        "failed to compensate ledger entry after aborted save"
                    );
                }
            }
            return Err(err);
        }

        tracing::debug!(
            product_id = %product.id,
            target = draft.target_quantity,
            delta = delta.signed(),
            "saved product draft"
        );
        Ok(product)
    }

    /// Delete a product according to the configured [`RemovePolicy`].
    pub async fn remove(&self, product_id: ProductId) -> StoreResult<()> {
        self.catalog.remove(product_id).await?;

        if self.remove_policy == RemovePolicy::CascadeMoves {
            let history = self.ledger.query(MoveFilter::any()).await?;
            for entry in history.into_iter().filter(|m| m.product_id == product_id) {
                self.ledger.remove(entry.id).await?;
            }
        }
        Ok(())
    }
}
