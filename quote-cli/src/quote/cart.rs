//! Ordered cart of quoted line items

use super::types::{LineItem, Money, QuoteError};

/// Line items in insertion order; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Identical lines are kept as separate rows.
    pub fn add_line(&mut self, item: LineItem) -> Result<(), QuoteError> {
        validate(&item)?;
        self.grand_total()
            .checked_add(item.total())
            .ok_or(QuoteError::Overflow)?;
        log::debug!(
            "Adding line: {} {} x{} = {}",
            item.section(),
            item.size(),
            item.quantity(),
            item.total()
        );
        self.items.push(item);
        Ok(())
    }

    /// Append several lines; nothing is added if any line is invalid
    pub fn add_lines(&mut self, items: Vec<LineItem>) -> Result<(), QuoteError> {
        let mut running = self.grand_total();
        for item in &items {
            validate(item)?;
            running = running
                .checked_add(item.total())
                .ok_or(QuoteError::Overflow)?;
        }
        for item in items {
            self.add_line(item)?;
        }
        Ok(())
    }

    /// Remove the line at `index`, shifting later lines down.
    /// Out-of-range indices leave the cart untouched.
    pub fn remove_line(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            log::debug!(
                "Ignoring delete of line {} (cart has {} lines)",
                index,
                self.items.len()
            );
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Like `remove_line`, but reports a stale index as an error
    pub fn try_remove_line(&mut self, index: usize) -> Result<LineItem, QuoteError> {
        let len = self.items.len();
        self.remove_line(index)
            .ok_or(QuoteError::IndexOutOfRange { index, len })
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line totals, zero for an empty cart.
    /// Adds are rejected before the sum can overflow.
    pub fn grand_total(&self) -> Money {
        self.items.iter().map(|i| i.total()).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate(item: &LineItem) -> Result<(), QuoteError> {
    if item.quantity() < 1 {
        return Err(QuoteError::InvalidQuantity {
            quantity: item.quantity(),
        });
    }
    Ok(())
}
