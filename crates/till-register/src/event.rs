//! Inbound UI events.

use till_commerce::catalog::ProductField;
use till_commerce::ProductId;

/// A cashier action delivered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The new-product form was submitted with raw field text.
    SubmitNewProduct {
        name: String,
        price_text: String,
        weight_label: String,
    },
    /// "Add" was clicked on a product row.
    ClickAddToBill(ProductId),
    /// A price or label field on a product row was changed.
    EditProductField {
        product_id: ProductId,
        field: ProductField,
        raw_value: String,
    },
    /// "X" was clicked on a bill line.
    ClickRemoveFromBill(ProductId),
    /// "Generate Bill" was clicked.
    ClickGenerateBill,
    /// The bill summary was closed.
    ClickCloseSummary,
}

impl UiEvent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SubmitNewProduct { .. } => "submit_new_product",
            UiEvent::ClickAddToBill(_) => "add_to_bill",
            UiEvent::EditProductField { .. } => "edit_product_field",
            UiEvent::ClickRemoveFromBill(_) => "remove_from_bill",
            UiEvent::ClickGenerateBill => "generate_bill",
            UiEvent::ClickCloseSummary => "close_summary",
        }
    }
}
