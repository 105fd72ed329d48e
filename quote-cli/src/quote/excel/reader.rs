//! Read an exported quote back from Excel format

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook_from_rs};

use super::SHEET_NAME;
use super::layout::*;
use crate::quote::types::{ClientField, ClientInfo, LineItem, Money};

/// Contents of an exported quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedQuote {
    pub client: ClientInfo,
    pub total: Money,
    pub lines: Vec<LineItem>,
}

/// Read a quote from an exported file
pub fn read_quote_file(path: &Path) -> Result<ExportedQuote> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;
    read_quote(&bytes).with_context(|| format!("Failed to read quote from: {}", path.display()))
}

/// Read a quote from exported bytes
pub fn read_quote(bytes: &[u8]) -> Result<ExportedQuote> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).context("Not a valid Excel document")?;

    let range = workbook
        .worksheet_range(SHEET_NAME)
        .with_context(|| format!("Failed to read sheet: {}", SHEET_NAME))?;

    let mut client = ClientInfo::default();
    for (row, field) in ClientField::all().iter().enumerate() {
        client.set(*field, get_cell_string(&range, row as u32, 1));
    }

    let total = get_cell_units(&range, TOTAL_ROW, 1).unwrap_or_default();

    let mut lines = Vec::new();
    let last_row = range.end().map(|(row, _)| row).unwrap_or(0);
    for row in (TABLE_HEADER_ROW + 1)..=last_row {
        // Only rows carrying a numeric index are line items
        if get_cell_units(&range, row, COL_INDEX).is_none() {
            continue;
        }

        let quantity = get_cell_units(&range, row, COL_QUANTITY)
            .with_context(|| format!("Row {} has no quantity", row + 1))?;
        let unit_price = get_cell_units(&range, row, COL_UNIT_PRICE)
            .with_context(|| format!("Row {} has no unit price", row + 1))?;
        let quantity = u32::try_from(quantity.units())
            .with_context(|| format!("Row {} quantity is too large", row + 1))?;

        let item = LineItem::new(
            get_cell_string(&range, row, COL_SECTION),
            get_cell_string(&range, row, COL_SIZE),
            quantity,
            unit_price,
        )
        .with_context(|| format!("Row {} is not a valid line", row + 1))?;

        if let Some(stored) = get_cell_units(&range, row, COL_TOTAL) {
            if stored != item.total() {
                log::warn!(
                    "Row {} total {} doesn't match quantity x price {}",
                    row + 1,
                    stored,
                    item.total()
                );
            }
        }

        lines.push(item);
    }

    Ok(ExportedQuote {
        client,
        total,
        lines,
    })
}

fn get_cell_string(range: &Range<Data>, row: u32, col: u16) -> String {
    match range.get_value((row, u32::from(col))) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        _ => String::new(),
    }
}

/// Non-negative whole number stored in a cell
fn get_cell_units(range: &Range<Data>, row: u32, col: u16) -> Option<Money> {
    match range.get_value((row, u32::from(col)))? {
        Data::Int(i) if *i >= 0 => Some(Money::new(*i as u64)),
        Data::Float(f) if *f >= 0.0 && f.fract() == 0.0 => Some(Money::new(*f as u64)),
        Data::String(s) => s.trim().parse::<u64>().ok().map(Money::new),
        _ => None,
    }
}
