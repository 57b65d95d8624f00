//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sellable product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Product name shown on rows and bills.
    pub name: String,
    /// Current unit price. Never negative.
    pub unit_price: Money,
    /// Unit weight or size label (e.g., "1kg", "500ml").
    pub unit_label: String,
}

impl Product {
    /// Create a product without validation. Use [`crate::catalog::Catalog`]
    /// to add products with an assigned id.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        unit_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            unit_label: unit_label.into(),
        }
    }
}

/// Product fields a cashier can edit in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    /// Unit price, parsed from the raw field text.
    Price,
    /// Unit label, stored verbatim.
    Weight,
}

impl ProductField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Price => "price",
            ProductField::Weight => "weight",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(ProductField::Price),
            "weight" | "label" => Ok(ProductField::Weight),
            other => Err(format!("unknown product field: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse() {
        assert_eq!("price".parse::<ProductField>(), Ok(ProductField::Price));
        assert_eq!("Weight".parse::<ProductField>(), Ok(ProductField::Weight));
        assert_eq!("label".parse::<ProductField>(), Ok(ProductField::Weight));
        assert!("name".parse::<ProductField>().is_err());
    }

    #[test]
    fn test_field_display() {
        assert_eq!(ProductField::Price.to_string(), "price");
        assert_eq!(ProductField::Weight.to_string(), "weight");
    }
}
