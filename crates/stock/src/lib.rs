//! Stock reconciliation and reporting.
//!
//! [`StockService`] is the one place that writes across the catalog, the
//! inventory store and the movement ledger, keeping a product's declared
//! on-hand quantity, its inventory row and its movement history mutually
//! consistent. [`report`] and [`suggest`] are read-only consumers.

pub mod report;
pub mod suggest;
pub mod workflow;

pub use report::{ReportRow, build_report};
pub use suggest::available_ingredients;
pub use workflow::{Draft, RemovePolicy, SaveContext, StockService};
