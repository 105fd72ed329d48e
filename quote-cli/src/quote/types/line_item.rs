//! Priced cart lines

use super::{Money, QuoteError};

/// Section label prefix for kitchen extra lines
pub const EXTRA_SECTION_PREFIX: &str = "Kitchen Extra - ";

/// A priced, quantified entry in the cart
///
/// The total is computed at construction and the fields are read-only,
/// so `total == quantity * unit_price` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    section: String,
    size: String,
    quantity: u32,
    unit_price: Money,
    total: Money,
}

impl LineItem {
    /// Create a line for a catalog service
    pub fn new(
        section: impl Into<String>,
        size: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<Self, QuoteError> {
        if quantity < 1 {
            return Err(QuoteError::InvalidQuantity { quantity });
        }
        let total = unit_price.times(quantity)?;
        Ok(LineItem {
            section: section.into(),
            size: size.into(),
            quantity,
            unit_price,
            total,
        })
    }

    /// Create a kitchen extra line (empty size, prefixed section label)
    pub fn extra(name: &str, quantity: u32, unit_price: Money) -> Result<Self, QuoteError> {
        Self::new(format!("{}{}", EXTRA_SECTION_PREFIX, name), "", quantity, unit_price)
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_extra(&self) -> bool {
        self.section.starts_with(EXTRA_SECTION_PREFIX)
    }
}
