//! Display model projected from catalog and bill snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;
use till_commerce::bill::{Bill, BillLine};
use till_commerce::catalog::Product;
use till_commerce::{CommerceError, Money, ProductId};

use crate::{EMPTY_BILL_MESSAGE, EMPTY_CATALOG_MESSAGE};

/// One row of the product list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductRow {
    /// Target of the row's edit and "add to bill" actions.
    pub product_id: ProductId,
    pub name: String,
    /// Initial value of the editable price field, two decimals, no symbol.
    pub price_field: String,
    /// Initial value of the editable label field.
    pub label_field: String,
}

/// The product list panel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductListView {
    pub rows: Vec<ProductRow>,
    /// Set when there are no rows.
    pub placeholder: Option<String>,
}

/// One line of the live bill or the bill summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BillRow {
    /// Target of the row's "remove" action.
    pub product_id: ProductId,
    /// `name (xquantity)`.
    pub label: String,
    /// `quantity * unit_price`, formatted with the currency symbol.
    pub amount_text: String,
}

/// The live, editable bill panel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BillView {
    pub rows: Vec<BillRow>,
    /// Set when there are no rows.
    pub placeholder: Option<String>,
    pub total_text: String,
    /// Whether the "generate bill" action is enabled.
    pub generate_enabled: bool,
}

/// The read-only confirmation shown when a bill is generated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryView {
    /// Per-session bill sequence number, starting at 1.
    pub bill_number: u64,
    pub issued_at: DateTime<Utc>,
    pub rows: Vec<BillRow>,
    pub total_text: String,
}

/// Everything on screen at once.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageView {
    pub products: ProductListView,
    pub bill: BillView,
    pub summary: Option<SummaryView>,
}

/// Render the product list.
pub fn render_product_list(products: &[Product]) -> ProductListView {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            product_id: p.id,
            name: p.name.clone(),
            price_field: p.unit_price.display_amount(),
            label_field: p.unit_label.clone(),
        })
        .collect();

    ProductListView {
        placeholder: rows.is_empty().then(|| EMPTY_CATALOG_MESSAGE.to_string()),
        rows,
    }
}

fn render_rows(lines: &[BillLine]) -> Result<Vec<BillRow>, CommerceError> {
    lines
        .iter()
        .map(|line| {
            Ok(BillRow {
                product_id: line.product_id,
                label: format!("{} (x{})", line.name, line.quantity),
                amount_text: line.line_total()?.display(),
            })
        })
        .collect()
}

/// Render the live bill with its running total.
///
/// The total is recomputed from the lines; generating a bill is only
/// enabled when there is at least one line.
pub fn render_bill(bill: &Bill) -> Result<BillView, CommerceError> {
    let rows = render_rows(bill.lines())?;
    let total = bill.total()?;

    Ok(BillView {
        placeholder: rows.is_empty().then(|| EMPTY_BILL_MESSAGE.to_string()),
        generate_enabled: !rows.is_empty(),
        total_text: total.display(),
        rows,
    })
}

/// Render the confirmation summary of a bill.
pub fn render_bill_summary(
    lines: &[BillLine],
    total: Money,
    bill_number: u64,
    issued_at: DateTime<Utc>,
) -> Result<SummaryView, CommerceError> {
    Ok(SummaryView {
        bill_number,
        issued_at,
        rows: render_rows(lines)?,
        total_text: total.display(),
    })
}

/// Render the whole page.
pub fn render_page(
    products: &[Product],
    bill: &Bill,
    summary: Option<&SummaryView>,
) -> Result<PageView, CommerceError> {
    Ok(PageView {
        products: render_product_list(products),
        bill: render_bill(bill)?,
        summary: summary.cloned(),
    })
}
