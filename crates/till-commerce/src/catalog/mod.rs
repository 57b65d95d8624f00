//! Catalog module.
//!
//! Contains the product type and the in-memory catalog store.

mod product;
mod store;

pub use product::{Product, ProductField};
pub use store::{Catalog, PriceEditPolicy, MAX_UNIT_PRICE_MINOR};
