//! The register: stores plus event handling.

use chrono::Utc;
use till_commerce::bill::{Bill, BillLine, BillPhase};
use till_commerce::catalog::{Catalog, Product, ProductField};
use till_commerce::{CommerceError, Money, ProductId};
use till_observability::StructuredLogger;
use till_view::{render_bill, render_bill_summary, render_page, render_product_list};
use till_view::{PageView, SummaryView};

use crate::{RegisterConfig, RegisterError, Surface, UiEvent};

/// A single till: the catalog, the current bill and the open summary.
#[derive(Debug, Clone)]
pub struct Register {
    catalog: Catalog,
    bill: Bill,
    summary: Option<SummaryView>,
    bills_issued: u64,
    logger: StructuredLogger,
}

impl Register {
    /// Create a register with the configured starting catalog and an empty bill.
    pub fn new(config: &RegisterConfig, logger: StructuredLogger) -> Self {
        Self::with_catalog(config.build_catalog(), logger)
    }

    /// Create a register around an existing catalog.
    pub fn with_catalog(catalog: Catalog, logger: StructuredLogger) -> Self {
        let currency = catalog.currency();
        Self {
            catalog,
            bill: Bill::new(currency),
            summary: None,
            bills_issued: 0,
            logger,
        }
    }

    /// Render the product list and the empty bill for the first time.
    pub fn start(&self, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        self.logger
            .info_builder("register started")
            .field_u64("products", self.catalog.len() as u64)
            .field("currency", self.catalog.currency().code())
            .emit();
        surface.display_product_rows(&render_product_list(self.catalog.products()));
        surface.display_bill_rows(&render_bill(&self.bill)?);
        Ok(())
    }

    /// Handle one UI event to completion.
    ///
    /// Rejected input is reported through `surface`; an `Err` means the
    /// stores could not complete the operation at all.
    pub fn handle(&mut self, event: UiEvent, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        self.logger
            .debug_builder("handling event")
            .field("event", event.name())
            .field("phase", self.phase().as_str())
            .emit();

        let result = match event {
            UiEvent::SubmitNewProduct {
                name,
                price_text,
                weight_label,
            } => self.submit_new_product(&name, &price_text, &weight_label, surface),
            UiEvent::ClickAddToBill(id) => self.add_to_bill(id, surface),
            UiEvent::EditProductField {
                product_id,
                field,
                raw_value,
            } => self.edit_product_field(product_id, field, &raw_value, surface),
            UiEvent::ClickRemoveFromBill(id) => self.remove_from_bill(id, surface),
            UiEvent::ClickGenerateBill => self.generate_bill(surface),
            UiEvent::ClickCloseSummary => self.close_summary(surface),
        };

        match result {
            Err(RegisterError::Commerce(e)) if e.is_user_facing() => {
                self.logger
                    .warn_builder("input rejected")
                    .field("reason", e.to_string())
                    .emit();
                surface.display_validation_error(&e.to_string());
                Ok(())
            }
            Err(e) => {
                self.logger
                    .error_builder("event failed")
                    .field("error", e.to_string())
                    .emit();
                Err(e)
            }
            Ok(()) => Ok(()),
        }
    }

    fn submit_new_product(
        &mut self,
        name: &str,
        price_text: &str,
        weight_label: &str,
        surface: &mut dyn Surface,
    ) -> Result<(), RegisterError> {
        let product = self.catalog.submit_new_product(name, price_text, weight_label)?;
        self.logger
            .info_builder("product added")
            .field_u64("product_id", product.id.get())
            .field("name", product.name.as_str())
            .field("price", product.unit_price.display_amount())
            .field("label", product.unit_label.as_str())
            .emit();

        surface.display_product_rows(&render_product_list(self.catalog.products()));
        surface.reset_product_form();
        Ok(())
    }

    fn add_to_bill(&mut self, id: ProductId, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        match self.bill.add_product(&self.catalog, id)? {
            Some(line) => {
                self.logger
                    .info_builder("bill line added")
                    .field_u64("product_id", id.get())
                    .field_i64("quantity", line.quantity)
                    .emit();
            }
            None => {
                self.logger
                    .debug_builder("add ignored, unknown product")
                    .field_u64("product_id", id.get())
                    .emit();
                return Ok(());
            }
        }

        surface.display_bill_rows(&render_bill(&self.bill)?);
        Ok(())
    }

    fn edit_product_field(
        &mut self,
        id: ProductId,
        field: ProductField,
        raw_value: &str,
        surface: &mut dyn Surface,
    ) -> Result<(), RegisterError> {
        let outcome = self
            .catalog
            .update_field(id, field, raw_value)
            .map(|product| product.is_some());

        match outcome {
            Ok(true) => {
                self.logger
                    .info_builder(format!("Updated product {}: {} to {}", id, field, raw_value))
                    .field_u64("product_id", id.get())
                    .field("field", field.as_str())
                    .emit();
                Ok(())
            }
            Ok(false) => {
                self.logger
                    .debug_builder("edit ignored, unknown product")
                    .field_u64("product_id", id.get())
                    .emit();
                Ok(())
            }
            Err(e @ (CommerceError::InvalidPriceEdit { .. } | CommerceError::PriceTooLarge { .. })) => {
                // Put the stored price back into the field the cashier typed over.
                surface.display_product_rows(&render_product_list(self.catalog.products()));
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn remove_from_bill(&mut self, id: ProductId, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        if self.bill.remove_product(id) {
            self.logger
                .info_builder("bill line removed")
                .field_u64("product_id", id.get())
                .emit();
        }
        surface.display_bill_rows(&render_bill(&self.bill)?);
        Ok(())
    }

    fn generate_bill(&mut self, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        if !self.phase().can_summarize() {
            self.logger
                .debug_builder("generate ignored")
                .field("phase", self.phase().as_str())
                .emit();
            return Ok(());
        }

        let total = self.bill.total()?;
        let summary = render_bill_summary(
            self.bill.lines(),
            total,
            self.bills_issued + 1,
            Utc::now(),
        )?;
        self.bills_issued += 1;

        self.logger
            .info_builder("bill generated")
            .field_u64("bill_number", summary.bill_number)
            .field_u64("lines", self.bill.len() as u64)
            .field("total", total.display_amount())
            .emit();

        surface.display_summary(&summary);
        self.summary = Some(summary);
        Ok(())
    }

    fn close_summary(&mut self, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        if !self.phase().can_close() {
            self.logger
                .debug_builder("close ignored")
                .field("phase", self.phase().as_str())
                .emit();
            return Ok(());
        }
        let Some(summary) = self.summary.take() else {
            return Ok(());
        };

        self.bill.clear();
        self.logger
            .info_builder("bill closed")
            .field_u64("bill_number", summary.bill_number)
            .emit();

        surface.hide_summary();
        surface.display_bill_rows(&render_bill(&self.bill)?);
        Ok(())
    }

    /// Empty the bill and re-render it. Does not touch an open summary.
    pub fn clear_bill(&mut self, surface: &mut dyn Surface) -> Result<(), RegisterError> {
        self.bill.clear();
        surface.display_bill_rows(&render_bill(&self.bill)?);
        Ok(())
    }

    /// Current bill total, recomputed from the lines.
    pub fn compute_total(&self) -> Result<Money, RegisterError> {
        Ok(self.bill.total()?)
    }

    /// Products in insertion order.
    pub fn list_products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Bill lines in the order their products were first added.
    pub fn list_bill_lines(&self) -> &[BillLine] {
        self.bill.lines()
    }

    /// Current lifecycle phase of the bill.
    pub fn phase(&self) -> BillPhase {
        BillPhase::derive(&self.bill, self.summary.is_some())
    }

    /// The open summary, if any.
    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    /// Number of bills generated this session.
    pub fn bills_issued(&self) -> u64 {
        self.bills_issued
    }

    /// Render every region at once.
    pub fn page(&self) -> Result<PageView, RegisterError> {
        Ok(render_page(
            self.catalog.products(),
            &self.bill,
            self.summary.as_ref(),
        )?)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogSeed, RecordedCall, RecordingSurface};
    use till_observability::{LogLevel, SessionId};

    fn register(seed: CatalogSeed) -> Register {
        let logger =
            StructuredLogger::in_memory(SessionId::from_string("test")).with_min_level(LogLevel::Trace);
        Register::new(&RegisterConfig::new("till-test").with_seed(seed), logger)
    }

    #[test]
    fn test_start_renders_products_and_empty_bill() {
        let reg = register(CatalogSeed::Demo);
        let mut surface = RecordingSurface::new();
        reg.start(&mut surface).unwrap();

        assert_eq!(surface.calls().len(), 2);
        assert_eq!(surface.last_products().unwrap().rows.len(), 5);
        assert!(!surface.last_bill().unwrap().generate_enabled);
    }

    #[test]
    fn test_unknown_add_does_not_render() {
        let mut reg = register(CatalogSeed::Demo);
        let mut surface = RecordingSurface::new();
        reg.handle(UiEvent::ClickAddToBill(ProductId::new(42)), &mut surface)
            .unwrap();
        assert!(surface.calls().is_empty());
        assert!(reg.list_bill_lines().is_empty());
    }

    #[test]
    fn test_price_edit_logs_update() {
        let mut reg = register(CatalogSeed::Demo);
        let mut surface = RecordingSurface::new();
        reg.handle(
            UiEvent::EditProductField {
                product_id: ProductId::new(1),
                field: ProductField::Price,
                raw_value: "90".to_string(),
            },
            &mut surface,
        )
        .unwrap();

        assert!(surface.calls().is_empty());
        let logged = reg.logger().captured();
        assert!(logged
            .iter()
            .any(|e| e.message == "Updated product 1: price to 90"));
    }

    #[test]
    fn test_quantity_limit_is_reported_to_surface() {
        let mut reg = register(CatalogSeed::Demo);
        let mut surface = RecordingSurface::new();
        for _ in 0..till_commerce::bill::MAX_QUANTITY_PER_LINE {
            reg.handle(UiEvent::ClickAddToBill(ProductId::new(1)), &mut surface)
                .unwrap();
        }
        surface.take();

        reg.handle(UiEvent::ClickAddToBill(ProductId::new(1)), &mut surface)
            .unwrap();
        assert!(matches!(
            surface.calls(),
            [RecordedCall::ValidationError(msg)] if msg.contains("9999")
        ));
    }

    #[test]
    fn test_close_without_summary_is_noop() {
        let mut reg = register(CatalogSeed::Demo);
        let mut surface = RecordingSurface::new();
        reg.handle(UiEvent::ClickAddToBill(ProductId::new(1)), &mut surface)
            .unwrap();
        surface.take();

        reg.handle(UiEvent::ClickCloseSummary, &mut surface).unwrap();
        assert!(surface.calls().is_empty());
        assert_eq!(reg.list_bill_lines().len(), 1);
    }

    #[test]
    fn test_clear_bill() {
        let mut reg = register(CatalogSeed::Demo);
        let mut surface = RecordingSurface::new();
        reg.handle(UiEvent::ClickAddToBill(ProductId::new(2)), &mut surface)
            .unwrap();
        reg.clear_bill(&mut surface).unwrap();

        assert!(reg.list_bill_lines().is_empty());
        assert_eq!(reg.phase(), BillPhase::Empty);
        assert_eq!(reg.compute_total().unwrap().amount_minor, 0);
    }
}
