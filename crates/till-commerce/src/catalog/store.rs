//! In-memory catalog store.

use crate::catalog::{Product, ProductField};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{parse_decimal, Currency, Money};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest unit price the catalog stores, in minor units (₹1,000,000,000.00 for INR).
pub const MAX_UNIT_PRICE_MINOR: i64 = 100_000_000_000;

/// How an in-place price edit handles text that is not a usable price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceEditPolicy {
    /// Unparseable or negative input is stored as a zero price.
    #[default]
    Coerce,
    /// Unparseable or negative input is refused and the product is unchanged.
    Reject,
}

impl PriceEditPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceEditPolicy::Coerce => "coerce",
            PriceEditPolicy::Reject => "reject",
        }
    }
}

impl FromStr for PriceEditPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coerce" => Ok(PriceEditPolicy::Coerce),
            "reject" => Ok(PriceEditPolicy::Reject),
            other => Err(format!("unknown price edit policy: {}", other)),
        }
    }
}

/// The list of sellable products, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: ProductId,
    currency: Currency,
    price_edit: PriceEditPolicy,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(currency: Currency) -> Self {
        Self {
            products: Vec::new(),
            next_id: ProductId::first(),
            currency,
            price_edit: PriceEditPolicy::default(),
        }
    }

    /// Create a catalog from existing products.
    ///
    /// The next assigned id is one past the largest seeded id.
    pub fn with_products(currency: Currency, products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .map(|p| p.id)
            .max()
            .map(ProductId::next)
            .unwrap_or_else(ProductId::first);
        Self {
            products,
            next_id,
            currency,
            price_edit: PriceEditPolicy::default(),
        }
    }

    /// Set the price edit policy.
    pub fn with_price_edit_policy(mut self, policy: PriceEditPolicy) -> Self {
        self.price_edit = policy;
        self
    }

    /// The catalog currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The active price edit policy.
    pub fn price_edit_policy(&self) -> PriceEditPolicy {
        self.price_edit
    }

    /// Add a validated product and assign it the next id.
    ///
    /// Returns a validation error if the name or unit label is blank or the
    /// price is not positive. The catalog is unchanged on error.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        unit_label: impl Into<String>,
    ) -> Result<Product, CommerceError> {
        let name = name.into().trim().to_string();
        let unit_label = unit_label.into().trim().to_string();

        if name.is_empty() {
            return Err(CommerceError::ValidationError(
                "product name is required".to_string(),
            ));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }
        if !unit_price.is_positive() {
            return Err(CommerceError::ValidationError(
                "price must be a positive number".to_string(),
            ));
        }
        if unit_price.amount_minor > MAX_UNIT_PRICE_MINOR {
            return Err(price_too_large(&unit_price.display_amount(), self.currency));
        }
        if unit_label.is_empty() {
            return Err(CommerceError::ValidationError(
                "unit label is required".to_string(),
            ));
        }

        let product = Product::new(self.next_id, name, unit_price, unit_label);
        self.next_id = self.next_id.next();
        self.products.push(product.clone());
        Ok(product)
    }

    /// Add a product from the raw text of the new-product form.
    pub fn submit_new_product(
        &mut self,
        name: &str,
        price_text: &str,
        unit_label: &str,
    ) -> Result<Product, CommerceError> {
        let price = parse_price(price_text, self.currency)?.ok_or_else(|| {
            CommerceError::ValidationError("price must be a positive number".to_string())
        })?;
        self.add_product(name, price, unit_label)
    }

    /// Update one field of a product in place.
    ///
    /// Returns `Ok(None)` when no product has this id. Bill lines already
    /// holding this product keep their own price snapshot. A readable price
    /// above [`MAX_UNIT_PRICE_MINOR`] is refused under either policy.
    pub fn update_field(
        &mut self,
        id: ProductId,
        field: ProductField,
        raw_value: &str,
    ) -> Result<Option<&Product>, CommerceError> {
        let currency = self.currency;
        let policy = self.price_edit;
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        match field {
            ProductField::Price => {
                let parsed = parse_price(raw_value, currency)?.filter(|m| !m.is_negative());
                product.unit_price = match (parsed, policy) {
                    (Some(price), _) => price,
                    (None, PriceEditPolicy::Coerce) => Money::zero(currency),
                    (None, PriceEditPolicy::Reject) => {
                        return Err(CommerceError::InvalidPriceEdit {
                            product_id: id.get(),
                            raw: raw_value.to_string(),
                        });
                    }
                };
            }
            ProductField::Weight => {
                product.unit_label = raw_value.to_string();
            }
        }

        Ok(Some(&*product))
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Read price text with the leading-number rule.
///
/// `Ok(None)` means the text is not a usable number. A positive value past
/// the cap is an error rather than a miss.
fn parse_price(raw: &str, currency: Currency) -> Result<Option<Money>, CommerceError> {
    let Some(value) = parse_decimal(raw) else {
        return Ok(None);
    };
    match Money::from_decimal(value, currency) {
        Some(price) if price.amount_minor > MAX_UNIT_PRICE_MINOR => {
            Err(price_too_large(raw, currency))
        }
        Some(price) => Ok(Some(price)),
        None if value > 0.0 => Err(price_too_large(raw, currency)),
        None => Ok(None),
    }
}

fn price_too_large(raw: &str, currency: Currency) -> CommerceError {
    CommerceError::PriceTooLarge {
        raw: raw.trim().to_string(),
        max: Money::new(MAX_UNIT_PRICE_MINOR, currency).display(),
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inr(minor: i64) -> Money {
        Money::new(minor, Currency::INR)
    }

    #[test]
    fn test_add_product_assigns_ids() {
        let mut catalog = Catalog::new(Currency::INR);
        let rice = catalog.add_product("Rice", inr(6000), "1kg").unwrap();
        let sugar = catalog.add_product("Sugar", inr(4550), "1kg").unwrap();

        assert_eq!(rice.id, ProductId::new(1));
        assert_eq!(sugar.id, ProductId::new(2));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].name, "Sugar");
    }

    #[test]
    fn test_seeded_catalog_continues_after_max_id() {
        let seed = vec![
            Product::new(ProductId::new(3), "Dal", inr(12000), "1kg"),
            Product::new(ProductId::new(9), "Oil", inr(15000), "1L"),
        ];
        let mut catalog = Catalog::with_products(Currency::INR, seed);
        let milk = catalog.add_product("Milk", inr(3000), "500ml").unwrap();
        assert_eq!(milk.id, ProductId::new(10));
    }

    #[test]
    fn test_add_product_validation() {
        let mut catalog = Catalog::new(Currency::INR);

        let err = catalog.add_product("", inr(1000), "1kg").unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));

        let err = catalog.add_product("Salt", inr(0), "1kg").unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));

        let err = catalog.add_product("Salt", inr(-100), "1kg").unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));

        let err = catalog.add_product("Salt", inr(1000), "  ").unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));

        let err = catalog
            .add_product("Salt", Money::new(1000, Currency::USD), "1kg")
            .unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_submit_new_product_parses_price() {
        let mut catalog = Catalog::new(Currency::INR);
        let p = catalog.submit_new_product("Tea", "250.5", "250g").unwrap();
        assert_eq!(p.unit_price, inr(25050));

        assert!(catalog.submit_new_product("Tea", "free", "250g").is_err());
        assert!(catalog.submit_new_product("Tea", "0.001", "250g").is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_update_price() {
        let mut catalog = Catalog::new(Currency::INR);
        let rice = catalog.add_product("Rice", inr(6000), "1kg").unwrap();

        let updated = catalog
            .update_field(rice.id, ProductField::Price, "90")
            .unwrap()
            .unwrap();
        assert_eq!(updated.unit_price, inr(9000));
    }

    #[test]
    fn test_update_price_coerces_invalid_to_zero() {
        let mut catalog = Catalog::new(Currency::INR);
        let rice = catalog.add_product("Rice", inr(6000), "1kg").unwrap();

        catalog.update_field(rice.id, ProductField::Price, "abc").unwrap();
        assert_eq!(catalog.get(rice.id).unwrap().unit_price, inr(0));

        catalog.update_field(rice.id, ProductField::Price, "-5").unwrap();
        assert_eq!(catalog.get(rice.id).unwrap().unit_price, inr(0));
    }

    #[test]
    fn test_update_price_reject_policy() {
        let mut catalog =
            Catalog::new(Currency::INR).with_price_edit_policy(PriceEditPolicy::Reject);
        let rice = catalog.add_product("Rice", inr(6000), "1kg").unwrap();

        let err = catalog
            .update_field(rice.id, ProductField::Price, "abc")
            .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPriceEdit { product_id: 1, .. }));
        assert_eq!(catalog.get(rice.id).unwrap().unit_price, inr(6000));

        // Zero is a readable price, only non-numbers and negatives are refused.
        catalog.update_field(rice.id, ProductField::Price, "0").unwrap();
        assert_eq!(catalog.get(rice.id).unwrap().unit_price, inr(0));
    }

    #[test]
    fn test_update_weight_is_verbatim() {
        let mut catalog = Catalog::new(Currency::INR);
        let rice = catalog.add_product("Rice", inr(6000), "1kg").unwrap();

        catalog
            .update_field(rice.id, ProductField::Weight, " 5 kg ")
            .unwrap();
        assert_eq!(catalog.get(rice.id).unwrap().unit_label, " 5 kg ");
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut catalog = Catalog::new(Currency::INR);
        catalog.add_product("Rice", inr(6000), "1kg").unwrap();
        let before = catalog.clone();

        let result = catalog
            .update_field(ProductId::new(999), ProductField::Price, "1")
            .unwrap();
        assert!(result.is_none());
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_oversized_price_is_refused_on_add() {
        let mut catalog = Catalog::new(Currency::INR);

        let err = catalog
            .submit_new_product("Gold", "90000000000000000", "1g")
            .unwrap_err();
        assert!(matches!(err, CommerceError::PriceTooLarge { .. }));
        assert!(err.is_user_facing());

        let err = catalog
            .add_product("Gold", inr(MAX_UNIT_PRICE_MINOR + 1), "1g")
            .unwrap_err();
        assert!(matches!(err, CommerceError::PriceTooLarge { .. }));
        assert!(catalog.is_empty());

        // The cap itself is still a valid price.
        catalog
            .add_product("Gold", inr(MAX_UNIT_PRICE_MINOR), "1g")
            .unwrap();
    }

    #[test]
    fn test_oversized_price_edit_keeps_old_price() {
        for policy in [PriceEditPolicy::Coerce, PriceEditPolicy::Reject] {
            let mut catalog = Catalog::new(Currency::INR).with_price_edit_policy(policy);
            let rice = catalog.add_product("Rice", inr(6000), "1kg").unwrap();

            let err = catalog
                .update_field(rice.id, ProductField::Price, "1e17")
                .unwrap_err();
            assert!(matches!(err, CommerceError::PriceTooLarge { ref raw, .. } if raw == "1e17"));
            assert_eq!(catalog.get(rice.id).unwrap().unit_price, inr(6000));
        }
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Reject".parse::<PriceEditPolicy>(), Ok(PriceEditPolicy::Reject));
        assert!("strict".parse::<PriceEditPolicy>().is_err());
    }
}
