//! Display model and HTML rendering for the till register.
//!
//! Rendering is split in two steps:
//! - [`model`] projects store snapshots into plain display structures
//!   (product rows, bill rows, running total, bill summary)
//! - [`html`] turns those structures into HTML fragments for a browser host
//!
//! Neither step touches the stores.

pub mod html;
pub mod model;

pub use model::*;

/// Shown in place of the product list when the catalog is empty.
pub const EMPTY_CATALOG_MESSAGE: &str = "No products available. Add one above!";

/// Shown in place of the bill lines when the bill is empty.
pub const EMPTY_BILL_MESSAGE: &str = "No items added yet.";
