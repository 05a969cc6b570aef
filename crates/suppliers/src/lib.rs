//! Supplier registry: contact records plus per-supplier price lists.

pub mod supplier;

pub use supplier::{PriceRow, Supplier, SupplierDirectory};
