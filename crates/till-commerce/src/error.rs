//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and bill operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// New-product form input was rejected.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A price edit could not be parsed and the edit policy rejects it.
    #[error("Invalid price for product {product_id}: {raw:?}")]
    InvalidPriceEdit { product_id: u64, raw: String },

    /// A price is above the largest unit price the catalog accepts.
    #[error("Price {raw:?} exceeds the maximum unit price of {max}")]
    PriceTooLarge { raw: String, max: String },

    /// Adding to the bill would push a line or the total past what money can hold.
    #[error("Adding product {0} would make the bill total too large")]
    TotalTooLarge(u64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Whether this error should be shown to the cashier as a blocking notice
    /// rather than treated as an internal failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CommerceError::ValidationError(_)
                | CommerceError::InvalidPriceEdit { .. }
                | CommerceError::PriceTooLarge { .. }
                | CommerceError::TotalTooLarge(_)
                | CommerceError::QuantityExceedsLimit(..)
        )
    }
}
