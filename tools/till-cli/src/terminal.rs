//! Terminal rendering of register views.

use serde_json::json;
use till_register::Surface;
use till_view::{BillView, ProductListView, SummaryView};

use crate::output::Output;

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 10;

/// Draws register regions to stdout, or one JSON object per region.
pub struct TerminalSurface {
    output: Output,
}

impl TerminalSurface {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Surface for TerminalSurface {
    fn display_product_rows(&mut self, view: &ProductListView) {
        if self.output.is_json() {
            self.output.json(&json!({ "region": "products", "view": view }));
            return;
        }

        self.output.header("Products");
        if let Some(placeholder) = &view.placeholder {
            self.output.placeholder(placeholder);
            return;
        }
        let widths = [ID_WIDTH, NAME_WIDTH, PRICE_WIDTH, NAME_WIDTH];
        self.output.table_row(&["ID", "NAME", "PRICE", "LABEL"], &widths);
        for row in &view.rows {
            let id = row.product_id.to_string();
            self.output.table_row(
                &[&id, &row.name, &row.price_field, &row.label_field],
                &widths,
            );
        }
    }

    fn display_bill_rows(&mut self, view: &BillView) {
        if self.output.is_json() {
            self.output.json(&json!({ "region": "bill", "view": view }));
            return;
        }

        self.output.header("Current Bill");
        if let Some(placeholder) = &view.placeholder {
            self.output.placeholder(placeholder);
        }
        let widths = [ID_WIDTH, NAME_WIDTH + 8, PRICE_WIDTH];
        for row in &view.rows {
            let id = row.product_id.to_string();
            self.output
                .table_row(&[&id, &row.label, &row.amount_text], &widths);
        }
        self.output.kv("Total", &view.total_text);
        if view.generate_enabled {
            self.output.debug("'generate' to show the bill");
        }
    }

    fn display_summary(&mut self, view: &SummaryView) {
        if self.output.is_json() {
            self.output.json(&json!({ "region": "summary", "view": view }));
            return;
        }

        self.output.header(&format!("Bill #{}", view.bill_number));
        self.output
            .kv("Issued", &view.issued_at.format("%Y-%m-%d %H:%M UTC").to_string());
        let widths = [NAME_WIDTH + 8, PRICE_WIDTH];
        for row in &view.rows {
            self.output.table_row(&[&row.label, &row.amount_text], &widths);
        }
        self.output.kv("Total", &view.total_text);
        self.output.info("'close' to start a new bill");
    }

    fn hide_summary(&mut self) {
        if self.output.is_json() {
            self.output.json(&json!({ "region": "summary", "view": null }));
            return;
        }
        self.output.success("Bill closed");
    }

    fn display_validation_error(&mut self, message: &str) {
        if self.output.is_json() {
            self.output.json(&json!({ "region": "alert", "message": message }));
            return;
        }
        self.output.warn(message);
    }
}
