//! Movement ledger boundary.

use async_trait::async_trait;

use cantina_core::{MoveId, StoreResult};

use crate::filter::MoveFilter;
use crate::movement::{NewStockMove, StockMove};

/// Append-only persistence boundary for stock movements.
#[async_trait]
pub trait MovementLedger: Send + Sync {
    /// Append one movement. The ledger assigns id and timestamp; the caller
    /// never supplies either. Rejects non-positive quantities with
    /// `DomainError::Validation`.
    async fn append(&self, entry: NewStockMove) -> StoreResult<StockMove>;

    /// Fully-materialized snapshot of matching movements, ordered by
    /// timestamp ascending.
    async fn query(&self, filter: MoveFilter) -> StoreResult<Vec<StockMove>>;

    /// Administrative delete. The only way an entry ever leaves the ledger;
    /// the reconciliation workflow uses it to compensate a failed save.
    async fn remove(&self, id: MoveId) -> StoreResult<()>;
}
