//! Domain errors for pricing and cart operations

/// Error raised by the catalog, quote builder or cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// No price for this (section, size) pair
    NotFound { section: String, size: String },
    /// Extra name is not in the catalog
    UnknownExtra { name: String },
    /// Quantity below 1
    InvalidQuantity { quantity: u32 },
    /// Extras were requested for a selection that doesn't offer them
    ExtrasNotOffered { section: String, size: String },
    /// Line index past the end of the cart
    IndexOutOfRange { index: usize, len: usize },
    /// Total doesn't fit in the currency type
    Overflow,
}

impl std::fmt::Display for QuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteError::NotFound { section, size } => {
                write!(f, "no price for section '{}' with size '{}'", section, size)
            }
            QuoteError::UnknownExtra { name } => write!(f, "unknown kitchen extra '{}'", name),
            QuoteError::InvalidQuantity { quantity } => {
                write!(f, "quantity must be at least 1 (got {})", quantity)
            }
            QuoteError::ExtrasNotOffered { section, size } => write!(
                f,
                "extras are only offered for Kitchen (Regular or Large), not '{}' / '{}'",
                section, size
            ),
            QuoteError::IndexOutOfRange { index, len } => {
                write!(f, "line {} is out of range (cart has {} lines)", index, len)
            }
            QuoteError::Overflow => write!(f, "total is too large"),
        }
    }
}

impl std::error::Error for QuoteError {}

/// Error when building a catalog from custom entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog has no priced entries
    Empty,
    /// Same (section, size) listed twice
    DuplicateEntry { section: String, size: String },
    /// Same extra name listed twice
    DuplicateExtra { name: String },
    /// Section, size or extra name is blank
    BlankName,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no entries"),
            CatalogError::DuplicateEntry { section, size } => {
                write!(f, "duplicate catalog entry '{}' / '{}'", section, size)
            }
            CatalogError::DuplicateExtra { name } => write!(f, "duplicate extra '{}'", name),
            CatalogError::BlankName => write!(f, "catalog names cannot be blank"),
        }
    }
}

impl std::error::Error for CatalogError {}
