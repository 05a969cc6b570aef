use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use cantina_core::{DomainError, MoveId, StoreError, StoreResult};
use cantina_ledger::{MoveFilter, MovementLedger, NewStockMove, StockMove};

/// In-memory append-only movement ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    inner: RwLock<LedgerState>,
}

#[derive(Debug, Default)]
struct LedgerState {
    moves: Vec<StockMove>,
    next_id: i64,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>() -> Result<T, StoreError> {
    Err(StoreError::transport("ledger lock poisoned"))
}

#[async_trait]
impl MovementLedger for InMemoryLedger {
    async fn append(&self, entry: NewStockMove) -> StoreResult<StockMove> {
        entry.validate()?;
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        state.next_id += 1;
        let stored = StockMove {
            id: MoveId::new(state.next_id),
            product_id: entry.product_id,
            direction: entry.direction,
            quantity: entry.quantity,
            recorded_at: Utc::now(),
            actor: entry.actor,
            supplier: entry.supplier,
        };
        state.moves.push(stored.clone());
        Ok(stored)
    }

    async fn query(&self, filter: MoveFilter) -> StoreResult<Vec<StockMove>> {
        let Ok(state) = self.inner.read() else {
            return poisoned();
        };
        let mut out: Vec<StockMove> = state
            .moves
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        out.sort_by_key(|m| m.recorded_at);
        Ok(out)
    }

    async fn remove(&self, id: MoveId) -> StoreResult<()> {
        let Ok(mut state) = self.inner.write() else {
            return poisoned();
        };
        let before = state.moves.len();
        state.moves.retain(|m| m.id != id);
        if state.moves.len() == before {
            return Err(DomainError::not_found().into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantina_core::ProductId;
    use cantina_ledger::Direction;

    fn entrance(product: i64, quantity: f64) -> NewStockMove {
        NewStockMove {
            product_id: ProductId::new(product),
            direction: Direction::Entrance,
            quantity,
            actor: None,
            supplier: None,
        }
    }

    #[tokio::test]
    async fn append_assigns_id_and_timestamp() {
        let ledger = InMemoryLedger::new();
        let before = Utc::now();
        let stored = ledger.append(entrance(1, 5.0)).await.unwrap();
        assert!(stored.recorded_at >= before);
        assert_eq!(stored.quantity, 5.0);
    }

    #[tokio::test]
    async fn append_rejects_zero_quantity() {
        let ledger = InMemoryLedger::new();
        let err = ledger.append(entrance(1, 0.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn query_filters_by_direction() {
        let ledger = InMemoryLedger::new();
        ledger.append(entrance(1, 5.0)).await.unwrap();
        ledger
            .append(NewStockMove {
                direction: Direction::Exit,
                ..entrance(1, 2.0)
            })
            .await
            .unwrap();

        let exits = ledger
            .query(MoveFilter::any().with_direction(Direction::Exit))
            .await
            .unwrap();
        assert_eq!(exits.len(), 1);
        assert_eq!(exits[0].direction, Direction::Exit);
    }

    #[tokio::test]
    async fn query_orders_by_timestamp_ascending() {
        let ledger = InMemoryLedger::new();
        for q in [1.0, 2.0, 3.0] {
            ledger.append(entrance(1, q)).await.unwrap();
        }
        let all = ledger.query(MoveFilter::any()).await.unwrap();
        assert!(all.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one_entry() {
        let ledger = InMemoryLedger::new();
        let a = ledger.append(entrance(1, 5.0)).await.unwrap();
        ledger.append(entrance(1, 6.0)).await.unwrap();

        ledger.remove(a.id).await.unwrap();
        let all = ledger.query(MoveFilter::any()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(ledger.remove(a.id).await.is_err());
    }
}
