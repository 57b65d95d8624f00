//! Starter catalogs.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// The demo grocery catalog a fresh register starts with.
///
/// Prices are written as rupees and paise and scaled to `currency`.
pub fn demo_catalog(currency: Currency) -> Catalog {
    let scale = 10_i64.pow(currency.decimal_places());
    let item = |id: u64, name: &str, major: i64, minor: i64, label: &str| {
        Product::new(
            ProductId::new(id),
            name,
            Money::new(major * scale + minor * scale / 100, currency),
            label,
        )
    };

    Catalog::with_products(
        currency,
        vec![
            item(1, "Rice", 60, 0, "1kg"),
            item(2, "Sugar", 45, 50, "1kg"),
            item(3, "Toor Dal", 120, 0, "1kg"),
            item(4, "Sunflower Oil", 150, 0, "1L"),
            item(5, "Milk", 30, 0, "500ml"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = demo_catalog(Currency::INR);
        assert_eq!(catalog.len(), 5);

        let sugar = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(sugar.unit_price.display(), "\u{20b9}45.50");

        let milk = catalog.get(ProductId::new(5)).unwrap();
        assert_eq!(milk.unit_label, "500ml");
    }

    #[test]
    fn test_demo_catalog_next_id() {
        let mut catalog = demo_catalog(Currency::INR);
        let p = catalog
            .add_product("Salt", Money::new(2000, Currency::INR), "1kg")
            .unwrap();
        assert_eq!(p.id, ProductId::new(6));
    }
}
