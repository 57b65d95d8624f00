//! Bill module.
//!
//! Contains the running bill, its line items and the bill lifecycle.

mod bill;
mod phase;

pub use bill::{Bill, BillLine, MAX_QUANTITY_PER_LINE};
pub use phase::BillPhase;
