//! Register configuration.

use serde::{Deserialize, Serialize};
use till_commerce::catalog::{Catalog, PriceEditPolicy};
use till_commerce::seed::demo_catalog;
use till_commerce::Currency;

/// Which products a new register starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSeed {
    /// The demo grocery catalog.
    #[default]
    Demo,
    /// No products.
    Empty,
}

impl CatalogSeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSeed::Demo => "demo",
            CatalogSeed::Empty => "empty",
        }
    }
}

/// Settings for a [`crate::Register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    pub terminal: String,
    pub currency: Currency,
    pub seed: CatalogSeed,
    pub price_edit: PriceEditPolicy,
}

impl RegisterConfig {
    pub fn new(terminal: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_seed(mut self, seed: CatalogSeed) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_price_edit(mut self, policy: PriceEditPolicy) -> Self {
        self.price_edit = policy;
        self
    }

    /// Build the starting catalog.
    pub fn build_catalog(&self) -> Catalog {
        let catalog = match self.seed {
            CatalogSeed::Demo => demo_catalog(self.currency),
            CatalogSeed::Empty => Catalog::new(self.currency),
        };
        catalog.with_price_edit_policy(self.price_edit)
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            terminal: "till-1".to_string(),
            currency: Currency::default(),
            seed: CatalogSeed::default(),
            price_edit: PriceEditPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_catalog() {
        let config = RegisterConfig::new("lane-2").with_seed(CatalogSeed::Empty);
        assert!(config.build_catalog().is_empty());

        let config = config
            .with_seed(CatalogSeed::Demo)
            .with_price_edit(PriceEditPolicy::Reject);
        let catalog = config.build_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.price_edit_policy(), PriceEditPolicy::Reject);
    }
}
