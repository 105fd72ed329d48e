//! Write a quote to Excel format

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::{EXPORT_MIME_TYPE, SHEET_NAME};
use super::layout::*;
use crate::quote::types::{ClientField, ClientInfo, LineItem, Money};

/// Serialize client info, lines and grand total into an XLSX document
pub fn export_quote(client: &ClientInfo, items: &[LineItem], grand_total: Money) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;

    write_client_block(worksheet, client, grand_total)?;
    write_line_table(worksheet, items)?;

    worksheet.autofit();

    let buffer = workbook
        .save_to_buffer()
        .context("Failed to serialize quote workbook")?;

    log::debug!(
        "Exported quote with {} lines ({} bytes)",
        items.len(),
        buffer.len()
    );
    Ok(buffer)
}

/// Write an exported document to disk
pub fn save_quote(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
    log::info!("Quote exported to: {} ({})", path.display(), EXPORT_MIME_TYPE);
    Ok(())
}

fn write_client_block(ws: &mut Worksheet, client: &ClientInfo, grand_total: Money) -> Result<()> {
    for (row, (label, field)) in CLIENT_LABELS.iter().zip(ClientField::all()).enumerate() {
        let row = row as u32;
        ws.write_string(row, 0, *label)?;
        ws.write_string(row, 1, client.get(*field))?;
    }

    ws.write_string(TOTAL_ROW, 0, TOTAL_LABEL)?;
    ws.write_number(TOTAL_ROW, 1, grand_total.as_f64())?;
    Ok(())
}

fn write_line_table(ws: &mut Worksheet, items: &[LineItem]) -> Result<()> {
    let header_format = Format::new().set_bold();

    for (col, name) in TABLE_COLUMNS.iter().enumerate() {
        ws.write_string_with_format(TABLE_HEADER_ROW, col as u16, *name, &header_format)?;
    }

    for (idx, item) in items.iter().enumerate() {
        let row = TABLE_HEADER_ROW + 1 + idx as u32;

        ws.write_number(row, COL_INDEX, (idx + 1) as f64)?;
        ws.write_string(row, COL_SECTION, item.section())?;
        ws.write_string(row, COL_SIZE, item.size())?;
        ws.write_number(row, COL_QUANTITY, f64::from(item.quantity()))?;
        ws.write_number(row, COL_UNIT_PRICE, item.unit_price().as_f64())?;
        ws.write_number(row, COL_TOTAL, item.total().as_f64())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::excel::read_quote;

    fn sample_client() -> ClientInfo {
        ClientInfo {
            name: "Acme Offices".to_string(),
            address_line1: "12 Main St".to_string(),
            address_line2: "Suite 4".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
        }
    }

    fn sample_lines() -> Vec<LineItem> {
        vec![
            LineItem::new("Kitchen", "Large", 1, Money::new(100)).unwrap(),
            LineItem::extra("Oven", 2, Money::new(40)).unwrap(),
            LineItem::new("Bathroom", "Full", 2, Money::new(95)).unwrap(),
        ]
    }

    #[test]
    fn test_export_produces_xlsx_bytes() {
        let bytes = export_quote(&sample_client(), &sample_lines(), Money::new(370)).unwrap();
        // XLSX is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_layout() {
        let lines = sample_lines();
        let bytes = export_quote(&sample_client(), &lines, Money::new(370)).unwrap();

        let quote = read_quote(&bytes).unwrap();

        assert_eq!(quote.client, sample_client());
        assert_eq!(quote.total, Money::new(370));
        assert_eq!(quote.lines, lines);
    }

    #[test]
    fn test_export_is_repeatable() {
        let lines = sample_lines();
        let first = read_quote(&export_quote(&sample_client(), &lines, Money::new(370)).unwrap()).unwrap();
        let second = read_quote(&export_quote(&sample_client(), &lines, Money::new(370)).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_empty_cart() {
        let bytes = export_quote(&ClientInfo::default(), &[], Money::ZERO).unwrap();
        let quote = read_quote(&bytes).unwrap();
        assert!(quote.lines.is_empty());
        assert_eq!(quote.total, Money::ZERO);
        assert_eq!(quote.client, ClientInfo::default());
    }

    #[test]
    fn test_save_quote() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaning_quote.xlsx");
        let bytes = export_quote(&sample_client(), &sample_lines(), Money::new(370)).unwrap();

        save_quote(&path, &bytes).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
