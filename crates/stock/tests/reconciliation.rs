//! End-to-end reconciliation scenarios against the in-memory stores.

use std::sync::Arc;

use async_trait::async_trait;
use cantina_catalog::CatalogStore;
use cantina_core::{
    DomainError, InventoryId, ProductId, Quantity, StoreError, StoreResult,
};
use cantina_inventory::{InventoryRow, InventoryStore};
use cantina_ledger::{Direction, MoveFilter, MovementLedger};
use cantina_memstore::{InMemoryCatalog, InMemoryInventory, InMemoryLedger};
use cantina_stock::{Draft, RemovePolicy, SaveContext, StockService, build_report};

struct Fixture {
    catalog: Arc<dyn CatalogStore>,
    inventory: Arc<dyn InventoryStore>,
    ledger: Arc<dyn MovementLedger>,
    service: StockService,
}

fn fixture() -> Fixture {
    let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::new());
    let inventory: Arc<dyn InventoryStore> = Arc::new(InMemoryInventory::new());
    let ledger: Arc<dyn MovementLedger> = Arc::new(InMemoryLedger::new());
    let service = StockService::new(catalog.clone(), inventory.clone(), ledger.clone());
    Fixture {
        catalog,
        inventory,
        ledger,
        service,
    }
}

fn draft(name: &str, min_stock: Quantity, target: Quantity) -> Draft {
    Draft {
        id: None,
        name: name.to_string(),
        category: None,
        unit: None,
        min_stock,
        target_quantity: target,
    }
}

#[tokio::test]
async fn coffee_scenario_create_then_edit() {
    let fx = fixture();

    // Create Coffee with threshold 500 and target 2500.
    let coffee = fx
        .service
        .save(draft("Coffee", 500.0, 2500.0), SaveContext::default())
        .await
        .unwrap();

    let row = fx.inventory.get(coffee.id).await.unwrap();
    assert_eq!(row.quantity, 2500.0);

    let moves = fx.ledger.query(MoveFilter::any()).await.unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].direction, Direction::Entrance);
    assert_eq!(moves[0].quantity, 2500.0);

    // Edit the same product down to 1800.
    let edited = Draft {
        id: Some(coffee.id),
        target_quantity: 1800.0,
        ..draft("Coffee", 500.0, 1800.0)
    };
    fx.service.save(edited, SaveContext::default()).await.unwrap();

    let row = fx.inventory.get(coffee.id).await.unwrap();
    assert_eq!(row.quantity, 1800.0);

    let moves = fx.ledger.query(MoveFilter::any()).await.unwrap();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[1].direction, Direction::Exit);
    assert_eq!(moves[1].quantity, 700.0);
}

#[tokio::test]
async fn unchanged_quantity_appends_nothing() {
    let fx = fixture();
    let p = fx
        .service
        .save(draft("Milk", 10.0, 40.0), SaveContext::default())
        .await
        .unwrap();

    let resave = Draft {
        id: Some(p.id),
        ..draft("Milk", 10.0, 40.0)
    };
    fx.service.save(resave, SaveContext::default()).await.unwrap();

    let moves = fx.ledger.query(MoveFilter::any()).await.unwrap();
    assert_eq!(moves.len(), 1, "no-op edit must not grow the ledger");
}

#[tokio::test]
async fn save_rejects_blank_name_and_negative_target() {
    let fx = fixture();

    let blank = draft("  ", 0.0, 10.0);
    assert!(matches!(
        fx.service.save(blank, SaveContext::default()).await,
        Err(StoreError::Domain(DomainError::Validation(_)))
    ));

    let negative = draft("Tea", 0.0, -3.0);
    assert!(matches!(
        fx.service.save(negative, SaveContext::default()).await,
        Err(StoreError::Domain(DomainError::Validation(_)))
    ));

    // Nothing leaked into any store.
    assert!(fx.catalog.list().await.unwrap().is_empty());
    assert!(fx.ledger.query(MoveFilter::any()).await.unwrap().is_empty());
}

#[tokio::test]
async fn editing_missing_product_is_not_found() {
    let fx = fixture();
    let ghost = Draft {
        id: Some(ProductId::new(404)),
        ..draft("Ghost", 0.0, 5.0)
    };
    assert!(matches!(
        fx.service.save(ghost, SaveContext::default()).await,
        Err(StoreError::Domain(DomainError::NotFound))
    ));
}

#[tokio::test]
async fn save_attributes_actor_and_supplier() {
    let fx = fixture();
    let ctx = SaveContext {
        actor: Some(cantina_core::UserId::new(3)),
        supplier: Some(cantina_core::SupplierId::new(9)),
    };
    fx.service.save(draft("Beans", 1.0, 12.0), ctx).await.unwrap();

    let moves = fx.ledger.query(MoveFilter::any()).await.unwrap();
    assert_eq!(moves[0].actor, Some(cantina_core::UserId::new(3)));
    assert_eq!(moves[0].supplier, Some(cantina_core::SupplierId::new(9)));
}

#[tokio::test]
async fn remove_orphan_keeps_history() {
    let fx = fixture();
    let p = fx
        .service
        .save(draft("Flour", 5.0, 20.0), SaveContext::default())
        .await
        .unwrap();

    fx.service.remove(p.id).await.unwrap();

    assert!(fx.catalog.get(p.id).await.is_err());
    // Observed behavior: the ledger and inventory row stay behind.
    assert_eq!(fx.ledger.query(MoveFilter::any()).await.unwrap().len(), 1);
    assert!(fx.inventory.get(p.id).await.is_ok());
}

#[tokio::test]
async fn remove_cascade_deletes_history() {
    let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::new());
    let inventory: Arc<dyn InventoryStore> = Arc::new(InMemoryInventory::new());
    let ledger: Arc<dyn MovementLedger> = Arc::new(InMemoryLedger::new());
    let service = StockService::new(catalog.clone(), inventory.clone(), ledger.clone())
        .with_remove_policy(RemovePolicy::CascadeMoves);

    let keep = service
        .save(draft("Salt", 1.0, 9.0), SaveContext::default())
        .await
        .unwrap();
    let gone = service
        .save(draft("Pepper", 1.0, 4.0), SaveContext::default())
        .await
        .unwrap();

    service.remove(gone.id).await.unwrap();

    let remaining = ledger.query(MoveFilter::any()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].product_id, keep.id);
}

#[tokio::test]
async fn report_falls_back_for_unresolved_products() {
    let fx = fixture();
    let p = fx
        .service
        .save(draft("Butter", 2.0, 8.0), SaveContext::default())
        .await
        .unwrap();
    fx.service.remove(p.id).await.unwrap();

    let rows = build_report(&fx.ledger, &fx.catalog, MoveFilter::any())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product_name, format!("product #{}", p.id));
}

#[tokio::test]
async fn report_uses_catalog_names() {
    let fx = fixture();
    fx.service
        .save(draft("Oats", 2.0, 8.0), SaveContext::default())
        .await
        .unwrap();

    let rows = build_report(&fx.ledger, &fx.catalog, MoveFilter::any())
        .await
        .unwrap();
    assert_eq!(rows[0].product_name, "Oats");
}

/// Inventory store whose quantity writes always fail, for exercising the
/// compensation path.
struct BrokenQuantityWrites {
    inner: InMemoryInventory,
}

#[async_trait]
impl InventoryStore for BrokenQuantityWrites {
    async fn list(&self) -> StoreResult<Vec<InventoryRow>> {
        self.inner.list().await
    }

    async fn get(&self, product_id: ProductId) -> StoreResult<InventoryRow> {
        self.inner.get(product_id).await
    }

    async fn ensure(&self, product_id: ProductId) -> StoreResult<InventoryRow> {
        self.inner.ensure(product_id).await
    }

    async fn set_quantity(
        &self,
        _id: InventoryId,
        _quantity: Quantity,
        _expected_prior: Option<Quantity>,
    ) -> StoreResult<InventoryRow> {
        Err(StoreError::transport("simulated outage"))
    }
}

#[tokio::test]
async fn failed_quantity_write_compensates_the_append() {
    let catalog: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::new());
    let inventory: Arc<dyn InventoryStore> = Arc::new(BrokenQuantityWrites {
        inner: InMemoryInventory::new(),
    });
    let ledger: Arc<dyn MovementLedger> = Arc::new(InMemoryLedger::new());
    let service = StockService::new(catalog, inventory.clone(), ledger.clone());

    let err = service
        .save(draft("Rice", 1.0, 30.0), SaveContext::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));

    // The appended movement was rolled back; ledger and inventory agree.
    assert!(ledger.query(MoveFilter::any()).await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_edit_from_stale_read_conflicts() {
    let fx = fixture();
    let p = fx
        .service
        .save(draft("Cocoa", 1.0, 100.0), SaveContext::default())
        .await
        .unwrap();

    // Another session moves the quantity underneath us.
    let row = fx.inventory.get(p.id).await.unwrap();
    fx.inventory
        .set_quantity(row.id, 55.0, Some(100.0))
        .await
        .unwrap();

    // A second writer using the stale prior quantity must get Conflict.
    let stale = fx
        .inventory
        .set_quantity(row.id, 80.0, Some(100.0))
        .await
        .unwrap_err();
    assert!(matches!(stale, StoreError::Domain(DomainError::Conflict(_))));
}
