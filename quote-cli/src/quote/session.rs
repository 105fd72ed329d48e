//! Quoting session: owns the cart and the pending selection.
//!
//! Every user action is an [`Action`] applied to the session; the caller
//! re-renders from the session afterwards.

use anyhow::Result;

use super::builder::{ExtraSelection, QuoteBuilder, Selection};
use super::cart::Cart;
use super::catalog::{PriceCatalog, offers_extras};
use super::excel::export_quote;
use super::types::{ClientField, ClientInfo, LineItem, Money, QuoteError};

/// A user action against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetClient(ClientField, String),
    SelectSection(String),
    SelectSize(String),
    SetQuantity(u32),
    ToggleExtra(String, bool),
    SetExtraQuantity(String, u32),
    AddToQuote,
    DeleteLine(usize),
    Reset,
}

/// What an action did to the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lines appended to the cart
    Added(usize),
    /// A line was removed
    Removed(LineItem),
    /// Cart emptied
    Cleared,
    /// Only the pending form state changed
    SelectionChanged,
    /// Nothing happened (e.g. delete of a stale index)
    Unchanged,
}

/// Checkbox state for one kitchen extra
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraChoice {
    pub name: String,
    pub unit_price: Money,
    pub selected: bool,
    pub quantity: u32,
}

/// Single-owner quoting session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: PriceCatalog,
    cart: Cart,
    client: ClientInfo,
    section: String,
    size: String,
    quantity: u32,
    extras: Vec<ExtraChoice>,
}

impl Session {
    /// Start an empty session with the first section/size preselected
    pub fn new(catalog: PriceCatalog) -> Self {
        let section = catalog
            .sections()
            .first()
            .map(|s| s.to_string())
            .unwrap_or_default();
        let size = first_size(&catalog, &section);
        let extras = catalog
            .extras_available()
            .iter()
            .map(|e| ExtraChoice {
                name: e.name.clone(),
                unit_price: e.unit_price,
                selected: false,
                quantity: 1,
            })
            .collect();

        Session {
            catalog,
            cart: Cart::new(),
            client: ClientInfo::default(),
            section,
            size,
            quantity: 1,
            extras,
        }
    }

    /// Apply one action
    pub fn apply(&mut self, action: Action) -> Result<Outcome, QuoteError> {
        log::debug!("Applying {:?}", action);

        match action {
            Action::SetClient(field, value) => {
                self.client.set(field, value);
                Ok(Outcome::SelectionChanged)
            }
            Action::SelectSection(section) => {
                let size = first_size(&self.catalog, &section);
                if size.is_empty() {
                    return Err(QuoteError::NotFound {
                        section,
                        size: String::new(),
                    });
                }
                self.section = section;
                self.size = size;
                Ok(Outcome::SelectionChanged)
            }
            Action::SelectSize(size) => {
                self.catalog.lookup_price(&self.section, &size)?;
                self.size = size;
                Ok(Outcome::SelectionChanged)
            }
            Action::SetQuantity(quantity) => {
                self.quantity = quantity.max(1);
                Ok(Outcome::SelectionChanged)
            }
            Action::ToggleExtra(name, selected) => {
                self.extra_mut(&name)?.selected = selected;
                Ok(Outcome::SelectionChanged)
            }
            Action::SetExtraQuantity(name, quantity) => {
                self.extra_mut(&name)?.quantity = quantity.max(1);
                Ok(Outcome::SelectionChanged)
            }
            Action::AddToQuote => {
                let selection = self.selection();
                let extras = self.pending_extras();
                let lines = QuoteBuilder::new(&self.catalog)
                    .build(&selection, &extras)?
                    .into_lines();
                let count = lines.len();
                self.cart.add_lines(lines)?;
                self.quantity = 1;
                for extra in &mut self.extras {
                    extra.quantity = 1;
                }
                log::info!(
                    "Added {} line(s) for {} / {}, cart total {}",
                    count,
                    selection.section,
                    selection.size,
                    self.cart.grand_total()
                );
                Ok(Outcome::Added(count))
            }
            Action::DeleteLine(index) => match self.cart.try_remove_line(index) {
                Ok(item) => Ok(Outcome::Removed(item)),
                Err(e) => {
                    log::debug!("Delete ignored: {}", e);
                    Ok(Outcome::Unchanged)
                }
            },
            Action::Reset => {
                self.cart.clear();
                self.quantity = 1;
                Ok(Outcome::Cleared)
            }
        }
    }

    /// Current form selection
    pub fn selection(&self) -> Selection {
        Selection::new(self.section.as_str(), self.size.as_str(), self.quantity)
    }

    /// Extras that will be added with the selection (none unless eligible)
    pub fn pending_extras(&self) -> Vec<ExtraSelection> {
        if !self.extras_offered() {
            return Vec::new();
        }
        self.extras
            .iter()
            .filter(|e| e.selected)
            .map(|e| ExtraSelection::new(e.name.as_str(), e.quantity))
            .collect()
    }

    /// Quantity x unit price for the pending selection, without extras
    pub fn pending_total(&self) -> Result<Money, QuoteError> {
        self.catalog
            .lookup_price(&self.section, &self.size)?
            .times(self.quantity)
    }

    pub fn extras_offered(&self) -> bool {
        offers_extras(&self.section, &self.size)
    }

    pub fn extra_choices(&self) -> &[ExtraChoice] {
        &self.extras
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn client(&self) -> &ClientInfo {
        &self.client
    }

    /// Exported document, or `None` when there is nothing to download
    pub fn download(&self) -> Result<Option<Vec<u8>>> {
        if self.cart.is_empty() {
            return Ok(None);
        }
        let bytes = export_quote(&self.client, self.cart.items(), self.cart.grand_total())?;
        Ok(Some(bytes))
    }

    fn extra_mut(&mut self, name: &str) -> Result<&mut ExtraChoice, QuoteError> {
        self.extras
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| QuoteError::UnknownExtra {
                name: name.to_string(),
            })
    }
}

fn first_size(catalog: &PriceCatalog, section: &str) -> String {
    catalog
        .sizes_for(section)
        .first()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::catalog::CatalogEntry;
    use crate::quote::excel::read_quote;

    fn session() -> Session {
        Session::new(PriceCatalog::builtin())
    }

    fn select(session: &mut Session, section: &str, size: &str, quantity: u32) {
        session.apply(Action::SelectSection(section.to_string())).unwrap();
        session.apply(Action::SelectSize(size.to_string())).unwrap();
        session.apply(Action::SetQuantity(quantity)).unwrap();
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session();
        let selection = session.selection();
        assert_eq!(selection.section, "Bathroom");
        assert_eq!(selection.size, "Half");
        assert_eq!(selection.quantity, 1);
        assert!(session.cart().is_empty());
        assert_eq!(session.pending_total().unwrap(), Money::new(50));
    }

    #[test]
    fn test_section_change_resets_size() {
        let mut session = session();
        session.apply(Action::SelectSize("Master".to_string())).unwrap();
        session.apply(Action::SelectSection("Kitchen".to_string())).unwrap();
        assert_eq!(session.selection().size, "Regular");
    }

    #[test]
    fn test_size_must_belong_to_section() {
        let mut session = session();
        let err = session.apply(Action::SelectSize("Large".to_string())).unwrap_err();
        assert!(matches!(err, QuoteError::NotFound { .. }));
        assert_eq!(session.selection().size, "Half");
    }

    #[test]
    fn test_quantity_clamped_to_one() {
        let mut session = session();
        session.apply(Action::SetQuantity(0)).unwrap();
        assert_eq!(session.selection().quantity, 1);
    }

    #[test]
    fn test_add_resets_quantity() {
        let mut session = session();
        select(&mut session, "Bathroom", "Full", 2);

        let outcome = session.apply(Action::AddToQuote).unwrap();

        assert_eq!(outcome, Outcome::Added(1));
        assert_eq!(session.cart().grand_total(), Money::new(190));
        assert_eq!(session.selection().quantity, 1);
    }

    #[test]
    fn test_kitchen_extras_added_together() {
        let mut session = session();
        select(&mut session, "Kitchen", "Large", 1);
        session.apply(Action::ToggleExtra("Oven".to_string(), true)).unwrap();
        session.apply(Action::SetExtraQuantity("Oven".to_string(), 2)).unwrap();

        assert_eq!(session.apply(Action::AddToQuote).unwrap(), Outcome::Added(2));

        let items = session.cart().items();
        assert_eq!(items[0].total(), Money::new(100));
        assert_eq!(items[1].section(), "Kitchen Extra - Oven");
        assert_eq!(items[1].total(), Money::new(80));
        assert_eq!(session.cart().grand_total(), Money::new(180));
    }

    #[test]
    fn test_add_resets_extra_quantities() {
        let mut session = session();
        select(&mut session, "Kitchen", "Large", 1);
        session.apply(Action::ToggleExtra("Oven".to_string(), true)).unwrap();
        session.apply(Action::SetExtraQuantity("Oven".to_string(), 2)).unwrap();

        session.apply(Action::AddToQuote).unwrap();

        let oven = session
            .extra_choices()
            .iter()
            .find(|e| e.name == "Oven")
            .unwrap();
        assert_eq!(oven.quantity, 1);
        assert!(oven.selected);
        assert_eq!(session.pending_extras(), vec![ExtraSelection::new("Oven", 1)]);
    }

    #[test]
    fn test_overflowing_add_leaves_cart_unchanged() {
        let catalog = PriceCatalog::new(
            vec![CatalogEntry {
                section: "Warehouse".to_string(),
                size: "Huge".to_string(),
                unit_price: Money::new(u64::MAX / 2 + 1),
            }],
            vec![],
        )
        .unwrap();
        let mut session = Session::new(catalog);

        assert_eq!(session.apply(Action::AddToQuote).unwrap(), Outcome::Added(1));
        assert_eq!(session.apply(Action::AddToQuote).unwrap_err(), QuoteError::Overflow);
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn test_extras_ignored_when_not_offered() {
        let mut session = session();
        select(&mut session, "Kitchen", "Large", 1);
        session.apply(Action::ToggleExtra("Fridge".to_string(), true)).unwrap();
        select(&mut session, "Office", "Standard", 1);

        assert!(!session.extras_offered());
        assert!(session.pending_extras().is_empty());
        assert_eq!(session.apply(Action::AddToQuote).unwrap(), Outcome::Added(1));
    }

    #[test]
    fn test_unknown_extra() {
        let mut session = session();
        assert!(matches!(
            session.apply(Action::ToggleExtra("Sauna".to_string(), true)),
            Err(QuoteError::UnknownExtra { .. })
        ));
    }

    #[test]
    fn test_delete_and_stale_delete() {
        let mut session = session();
        select(&mut session, "Bathroom", "Half", 1);
        session.apply(Action::AddToQuote).unwrap();
        select(&mut session, "Bathroom", "Full", 1);
        session.apply(Action::AddToQuote).unwrap();
        select(&mut session, "Bathroom", "Master", 1);
        session.apply(Action::AddToQuote).unwrap();

        let outcome = session.apply(Action::DeleteLine(1)).unwrap();
        assert!(matches!(outcome, Outcome::Removed(ref item) if item.size() == "Full"));
        assert_eq!(session.cart().grand_total(), Money::new(170));

        assert_eq!(session.apply(Action::DeleteLine(5)).unwrap(), Outcome::Unchanged);
        assert_eq!(session.cart().len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        select(&mut session, "Stairs", "Standard", 3);
        session.apply(Action::AddToQuote).unwrap();
        session.apply(Action::SetQuantity(4)).unwrap();

        assert_eq!(session.apply(Action::Reset).unwrap(), Outcome::Cleared);
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().grand_total(), Money::ZERO);
        assert_eq!(session.selection().quantity, 1);
    }

    #[test]
    fn test_download_requires_lines() {
        let mut session = session();
        assert!(session.download().unwrap().is_none());

        session
            .apply(Action::SetClient(ClientField::Name, "Jane Doe".to_string()))
            .unwrap();
        select(&mut session, "Hallway", "Standard", 2);
        session.apply(Action::AddToQuote).unwrap();

        let bytes = session.download().unwrap().unwrap();
        let quote = read_quote(&bytes).unwrap();
        assert_eq!(quote.client.name, "Jane Doe");
        assert_eq!(quote.total, Money::new(50));
        assert_eq!(quote.lines.len(), 1);
    }
}
