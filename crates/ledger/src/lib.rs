//! Stock-movement ledger domain module.
//!
//! Append-only history of stock entrances and exits, the delta computation
//! that feeds it, and the [`MovementLedger`] boundary.

pub mod filter;
pub mod movement;
pub mod store;

pub use filter::MoveFilter;
pub use movement::{Delta, Direction, NewStockMove, StockMove};
pub use store::MovementLedger;
