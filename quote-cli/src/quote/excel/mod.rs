//! Excel export of a quote, and reading an exported quote back

mod reader;
mod writer;

pub use reader::{read_quote, read_quote_file};
pub use writer::{export_quote, save_quote};

/// File name offered for download
pub const EXPORT_FILE_NAME: &str = "cleaning_quote.xlsx";

/// MIME type of the exported document
pub const EXPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Quote";

/// Fixed sheet layout shared by the writer and reader (0-based rows/cols)
mod layout {
    /// Label/value rows at the top, in order
    pub const CLIENT_LABELS: [&str; 6] = [
        "Client Name:",
        "Address:",
        "Address 2:",
        "City:",
        "State:",
        "ZIP Code:",
    ];
    pub const TOTAL_LABEL: &str = "Total:";
    pub const TOTAL_ROW: u32 = 6;

    /// Line table header, one blank row below the header block
    pub const TABLE_HEADER_ROW: u32 = 8;
    pub const TABLE_COLUMNS: [&str; 6] = ["#", "Section", "Size", "Quantity", "Unit Price", "Total"];

    pub const COL_INDEX: u16 = 0;
    pub const COL_SECTION: u16 = 1;
    pub const COL_SIZE: u16 = 2;
    pub const COL_QUANTITY: u16 = 3;
    pub const COL_UNIT_PRICE: u16 = 4;
    pub const COL_TOTAL: u16 = 5;
}
