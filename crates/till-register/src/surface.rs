//! Outbound rendering interface to the host UI.

use till_view::{BillView, ProductListView, SummaryView};

/// The host UI the register renders into.
///
/// Each call replaces the whole region it names.
pub trait Surface {
    /// Replace the product list.
    fn display_product_rows(&mut self, view: &ProductListView);

    /// Replace the bill lines, running total and generate button state.
    fn display_bill_rows(&mut self, view: &BillView);

    /// Show the bill summary.
    fn display_summary(&mut self, view: &SummaryView);

    /// Hide the bill summary.
    fn hide_summary(&mut self);

    /// Show a blocking notice for rejected input.
    fn display_validation_error(&mut self, message: &str);

    /// Clear the new-product form after a successful add.
    fn reset_product_form(&mut self) {}
}

/// A call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    ProductRows(ProductListView),
    BillRows(BillView),
    Summary(SummaryView),
    HideSummary,
    ValidationError(String),
    ResetProductForm,
}

/// A surface that remembers every call, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<RecordedCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<RecordedCall> {
        std::mem::take(&mut self.calls)
    }

    /// The most recent bill view shown.
    pub fn last_bill(&self) -> Option<&BillView> {
        self.calls.iter().rev().find_map(|c| match c {
            RecordedCall::BillRows(view) => Some(view),
            _ => None,
        })
    }

    /// The most recent product list shown.
    pub fn last_products(&self) -> Option<&ProductListView> {
        self.calls.iter().rev().find_map(|c| match c {
            RecordedCall::ProductRows(view) => Some(view),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn display_product_rows(&mut self, view: &ProductListView) {
        self.calls.push(RecordedCall::ProductRows(view.clone()));
    }

    fn display_bill_rows(&mut self, view: &BillView) {
        self.calls.push(RecordedCall::BillRows(view.clone()));
    }

    fn display_summary(&mut self, view: &SummaryView) {
        self.calls.push(RecordedCall::Summary(view.clone()));
    }

    fn hide_summary(&mut self) {
        self.calls.push(RecordedCall::HideSummary);
    }

    fn display_validation_error(&mut self, message: &str) {
        self.calls.push(RecordedCall::ValidationError(message.to_string()));
    }

    fn reset_product_form(&mut self) {
        self.calls.push(RecordedCall::ResetProductForm);
    }
}
