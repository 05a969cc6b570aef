//! Movement ledger over `GET/POST /stock` and `DELETE /stock/{id}`.

use async_trait::async_trait;
use chrono::SecondsFormat;

use cantina_core::{MoveId, StoreResult};
use cantina_ledger::{MoveFilter, MovementLedger, NewStockMove, StockMove};

use crate::dto::{NewStockMoveDto, StockMoveDto, TipoDto};
use crate::http::RestClient;

pub struct RestLedger {
    client: RestClient,
}

impl RestLedger {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

fn filter_params(filter: &MoveFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(from) = filter.from {
        params.push(("from", from.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }
    if let Some(to) = filter.to {
        params.push(("to", to.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }
    if let Some(direction) = filter.direction {
        params.push(("tipo", TipoDto::from(direction).as_param().to_string()));
    }
    params
}

#[async_trait]
impl MovementLedger for RestLedger {
    async fn append(&self, entry: NewStockMove) -> StoreResult<StockMove> {
        entry.validate()?;
        let dto: StockMoveDto = self
            .client
            .post_json("/stock", &NewStockMoveDto::from(entry))
            .await?;
        Ok(dto.into())
    }

    async fn query(&self, filter: MoveFilter) -> StoreResult<Vec<StockMove>> {
        let dtos: Vec<StockMoveDto> = self
            .client
            .get_json_with_query("/stock", &filter_params(&filter))
            .await?;
        let mut moves: Vec<StockMove> = dtos.into_iter().map(StockMove::from).collect();
        // The contract promises ascending order; enforce it locally so a
        // sloppy backend cannot break report rendering.
        moves.sort_by_key(|m| m.recorded_at);
        Ok(moves)
    }

    async fn remove(&self, id: MoveId) -> StoreResult<()> {
        self.client.delete(&format!("/stock/{id}")).await
    }
}
