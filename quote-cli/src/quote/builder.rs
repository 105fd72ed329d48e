//! Turns the current selection into priced cart lines

use super::catalog::{PriceCatalog, offers_extras};
use super::types::{LineItem, QuoteError};

/// Chosen service and quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub section: String,
    pub size: String,
    pub quantity: u32,
}

impl Selection {
    pub fn new(section: impl Into<String>, size: impl Into<String>, quantity: u32) -> Self {
        Selection {
            section: section.into(),
            size: size.into(),
            quantity,
        }
    }
}

/// Chosen kitchen extra and its own quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraSelection {
    pub name: String,
    pub quantity: u32,
}

impl ExtraSelection {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        ExtraSelection {
            name: name.into(),
            quantity,
        }
    }
}

/// Base line plus its extra lines, inserted into the cart together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuote {
    pub base: LineItem,
    pub extras: Vec<LineItem>,
}

impl BuiltQuote {
    /// Base line first, then extras in selection order
    pub fn into_lines(self) -> Vec<LineItem> {
        let mut lines = Vec::with_capacity(1 + self.extras.len());
        lines.push(self.base);
        lines.extend(self.extras);
        lines
    }
}

/// Prices selections against a catalog
pub struct QuoteBuilder<'a> {
    catalog: &'a PriceCatalog,
}

impl<'a> QuoteBuilder<'a> {
    pub fn new(catalog: &'a PriceCatalog) -> Self {
        QuoteBuilder { catalog }
    }

    /// Price a selection and its extras.
    ///
    /// Extras are only accepted for Kitchen in a Regular or Large size.
    pub fn build(
        &self,
        selection: &Selection,
        extras: &[ExtraSelection],
    ) -> Result<BuiltQuote, QuoteError> {
        let unit_price = self
            .catalog
            .lookup_price(&selection.section, &selection.size)?;
        let base = LineItem::new(
            selection.section.as_str(),
            selection.size.as_str(),
            selection.quantity,
            unit_price,
        )?;

        if !extras.is_empty() && !offers_extras(&selection.section, &selection.size) {
            return Err(QuoteError::ExtrasNotOffered {
                section: selection.section.clone(),
                size: selection.size.clone(),
            });
        }

        let extras = extras
            .iter()
            .map(|extra| {
                let price = self.catalog.extra_price(&extra.name)?;
                LineItem::extra(&extra.name, extra.quantity, price)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BuiltQuote { base, extras })
    }
}
