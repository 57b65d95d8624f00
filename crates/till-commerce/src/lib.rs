//! Catalog and bill domain types for the till point-of-sale helper.
//!
//! This crate holds the two in-memory stores a cashier works with:
//!
//! - **Catalog**: sellable products with an editable price and unit label
//! - **Bill**: the running transaction, one line per product with a price snapshot
//!
//! # Example
//!
//! ```
//! use till_commerce::prelude::*;
//!
//! let mut catalog = Catalog::new(Currency::INR);
//! let rice = catalog.submit_new_product("Rice", "60", "1kg").unwrap().id;
//!
//! let mut bill = Bill::new(Currency::INR);
//! bill.add_product(&catalog, rice).unwrap();
//! bill.add_product(&catalog, rice).unwrap();
//!
//! assert_eq!(bill.total().unwrap().display(), "\u{20b9}120.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod seed;

pub mod bill;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{parse_decimal, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{parse_decimal, Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, PriceEditPolicy, Product, ProductField, MAX_UNIT_PRICE_MINOR,
    };

    // Bill
    pub use crate::bill::{Bill, BillLine, BillPhase, MAX_QUANTITY_PER_LINE};
}
