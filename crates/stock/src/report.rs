//! Stock-movement report: ledger snapshot joined with catalog names.

use std::collections::HashMap;
use std::sync::Arc;

use cantina_catalog::CatalogStore;
use cantina_core::{ProductId, StoreResult};
use cantina_ledger::{MoveFilter, MovementLedger, StockMove};

/// One report line: a movement plus the display name of its product.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub movement: StockMove,
    pub product_name: String,
}

/// Read-only join over ledger and catalog, ordered by timestamp ascending.
///
/// A movement whose product no longer resolves (deleted under the orphan
/// policy) gets a fallback label instead of failing the whole report.
pub async fn build_report(
    ledger: &Arc<dyn MovementLedger>,
    catalog: &Arc<dyn CatalogStore>,
    filter: MoveFilter,
) -> StoreResult<Vec<ReportRow>> {
    let movements = ledger.query(filter).await?;
    let names: HashMap<ProductId, String> = catalog
        .list()
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    Ok(movements
        .into_iter()
        .map(|movement| {
            let product_name = names
                .get(&movement.product_id)
                .cloned()
                .unwrap_or_else(|| fallback_label(movement.product_id));
            ReportRow {
                movement,
                product_name,
            }
        })
        .collect())
}

fn fallback_label(id: ProductId) -> String {
    format!("product #{id}")
}
