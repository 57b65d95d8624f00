//! Register error types.

use thiserror::Error;
use till_commerce::CommerceError;

/// Failures a register cannot report to the cashier as a validation notice.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// A store operation failed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
