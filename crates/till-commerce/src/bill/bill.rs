//! Bill and bill line types.

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per bill line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// One product's entry on the running bill.
///
/// `name` and `unit_price` are copied from the catalog when the line is
/// created; later catalog edits do not reach them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillLine {
    /// Product this line was created from.
    pub product_id: ProductId,
    /// Product name at the time of the first add.
    pub name: String,
    /// Unit price at the time of the first add.
    pub unit_price: Money,
    /// Quantity, at least 1.
    pub quantity: i64,
}

impl BillLine {
    /// Price of the whole line (unit_price * quantity).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The running bill for the current customer.
///
/// Holds at most one line per product, in the order products were first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    lines: Vec<BillLine>,
    currency: Currency,
}

impl Bill {
    /// Create an empty bill.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// The bill currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a catalog product to the bill.
    ///
    /// Increments the existing line for this product, or snapshots the
    /// product's current name and price into a new line with quantity 1.
    /// Returns `Ok(None)` if the catalog has no such product. The bill is
    /// unchanged on error.
    pub fn add_product(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
    ) -> Result<Option<&BillLine>, CommerceError> {
        let Some(product) = catalog.get(product_id) else {
            return Ok(None);
        };

        if let Some(pos) = self.lines.iter().position(|l| l.product_id == product_id) {
            let line = &self.lines[pos];
            let quantity = line.quantity.checked_add(1).ok_or(CommerceError::Overflow)?;
            if quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            self.check_room_for(product_id, line.unit_price, quantity)?;

            self.lines[pos].quantity = quantity;
            return Ok(Some(&self.lines[pos]));
        }

        if product.unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.unit_price.currency.code().to_string(),
            });
        }
        self.check_room_for(product_id, product.unit_price, 1)?;

        self.lines.push(BillLine {
            product_id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
        });
        Ok(self.lines.last())
    }

    /// Check that one more unit at `unit_price` keeps the line at `quantity`
    /// and the bill total representable.
    fn check_room_for(
        &self,
        product_id: ProductId,
        unit_price: Money,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        let too_large = || CommerceError::TotalTooLarge(product_id.get());
        unit_price.try_multiply(quantity).ok_or_else(too_large)?;
        self.total()?.try_add(&unit_price).ok_or_else(too_large)?;
        Ok(())
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove_product(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines, recomputed on each call.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.lines.iter().try_fold(Money::zero(self.currency), |acc, line| {
            acc.try_add(&line.line_total()?)
                .ok_or(CommerceError::Overflow)
        })
    }

    /// All lines in the order their products were first added.
    pub fn lines(&self) -> &[BillLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&BillLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Total units on the bill (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the bill is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Bill {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
