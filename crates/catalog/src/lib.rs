//! Product catalog domain module.
//!
//! Business rules for products (names, categories, minimum-stock thresholds)
//! plus the [`CatalogStore`] boundary the workflows talk to. No IO here;
//! store implementations live in `cantina-memstore` and `cantina-rest`.

pub mod product;
pub mod store;

pub use product::{NewProduct, Product, ProductPatch};
pub use store::CatalogStore;
