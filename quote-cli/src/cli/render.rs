//! Plain-text rendering of the cart and catalog

use crate::quote::{Cart, PriceCatalog};

const HEADERS: [&str; 6] = ["#", "Section", "Size", "Qty", "Unit Price", "Total"];

/// Render cart lines as an aligned table followed by the grand total
pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Quote is empty\n".to_string();
    }

    let rows: Vec<[String; 6]> = cart
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            [
                (i + 1).to_string(),
                item.section().to_string(),
                item.size().to_string(),
                item.quantity().to_string(),
                item.unit_price().to_string(),
                item.total().to_string(),
            ]
        })
        .collect();

    let mut out = render_table(&HEADERS, &rows);
    out.push_str(&format!("\nTotal: {}\n", cart.grand_total()));
    out
}

/// Render the price table and extras
pub fn render_catalog(catalog: &PriceCatalog) -> String {
    let rows: Vec<[String; 3]> = catalog
        .entries()
        .iter()
        .map(|e| [e.section.clone(), e.size.clone(), e.unit_price.to_string()])
        .collect();
    let mut out = render_table(&["Section", "Size", "Price"], &rows);

    if !catalog.extras_available().is_empty() {
        out.push_str("\nKitchen extras (Kitchen Regular/Large only):\n");
        let rows: Vec<[String; 2]> = catalog
            .extras_available()
            .iter()
            .map(|e| [e.name.clone(), e.unit_price.to_string()])
            .collect();
        out.push_str(&render_table(&["Extra", "Price"], &rows));
    }
    out
}

fn render_table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = (*headers).map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
