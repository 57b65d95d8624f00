//! HTML fragment renderers for a browser host.
//!
//! Markup keeps the hooks the host listens on: `data-id` and `data-field`
//! on editable inputs, `add-to-bill-btn` and `remove-from-bill-btn` on
//! action buttons.

use crate::model::{BillRow, BillView, PageView, ProductListView, SummaryView};

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the product list section.
pub fn product_list(view: &ProductListView) -> String {
    if let Some(placeholder) = &view.placeholder {
        return format!(
            r#"<section class="product-list" data-section="products"><p>{}</p></section>"#,
            escape(placeholder)
        );
    }

    let rows: String = view
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"
    <div class="product-row">
        <span class="product-name">{name}</span>
        <div>
            <input type="number" value="{price}" data-id="{id}" data-field="price">
            <input type="text" value="{label}" data-id="{id}" data-field="weight">
            <button data-id="{id}" class="add-to-bill-btn">Add</button>
        </div>
    </div>"#,
                name = escape(&row.name),
                price = escape(&row.price_field),
                label = escape(&row.label_field),
                id = row.product_id,
            )
        })
        .collect();

    format!(
        r#"<section class="product-list" data-section="products">{}
</section>"#,
        rows
    )
}

fn bill_row(row: &BillRow, removable: bool) -> String {
    let remove = if removable {
        format!(
            r#"
        <button data-id="{}" class="remove-from-bill-btn">X</button>"#,
            row.product_id
        )
    } else {
        String::new()
    };

    format!(
        r#"
    <div class="bill-row">
        <span>{label}</span>
        <span>{amount}</span>{remove}
    </div>"#,
        label = escape(&row.label),
        amount = escape(&row.amount_text),
        remove = remove
    )
}

/// Render the live bill panel with total and generate button.
pub fn bill_panel(view: &BillView) -> String {
    let items: String = match &view.placeholder {
        Some(placeholder) => format!("\n    <p>{}</p>", escape(placeholder)),
        None => view.rows.iter().map(|row| bill_row(row, true)).collect(),
    };
    let disabled = if view.generate_enabled { "" } else { " disabled" };

    format!(
        r#"<section class="bill" data-section="bill">
<div class="bill-items">{items}
</div>
<div class="bill-total">Total: <span id="billTotal">{total}</span></div>
<button id="generateBillBtn"{disabled}>Generate Bill</button>
</section>"#,
        items = items,
        total = escape(&view.total_text),
        disabled = disabled
    )
}

/// Render the bill summary dialog.
pub fn summary_dialog(view: &SummaryView) -> String {
    let rows: String = view.rows.iter().map(|row| bill_row(row, false)).collect();

    format!(
        r#"<dialog class="bill-modal visible" data-section="summary" open>
<h2>Bill #{number}</h2>
<p class="bill-issued">{issued}</p>
<div class="bill-details">{rows}
</div>
<div class="bill-total">Total: <span>{total}</span></div>
<button id="closeModalBtn">Close</button>
</dialog>"#,
        number = view.bill_number,
        issued = view.issued_at.format("%Y-%m-%d %H:%M UTC"),
        rows = rows,
        total = escape(&view.total_text)
    )
}

/// Render every section of the page.
pub fn page(view: &PageView) -> String {
    let mut html = String::new();
    html.push_str(&product_list(&view.products));
    html.push('\n');
    html.push_str(&bill_panel(&view.bill));
    if let Some(summary) = &view.summary {
        html.push('\n');
        html.push_str(&summary_dialog(summary));
    }
    html
}
