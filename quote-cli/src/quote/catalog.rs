//! Price catalog: (section, size) -> unit price, plus kitchen extras

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::types::{CatalogError, Money, QuoteError};

/// Section that offers extras
pub const KITCHEN_SECTION: &str = "Kitchen";

/// Kitchen sizes that offer extras
pub const EXTRA_SIZES: &[&str] = &["Regular", "Large"];

/// One priced (section, size) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub section: String,
    pub size: String,
    #[serde(rename = "price")]
    pub unit_price: Money,
}

/// One kitchen extra
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCatalogEntry {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Money,
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
    #[serde(default)]
    extras: Vec<ExtraCatalogEntry>,
}

/// Immutable price table
#[derive(Debug, Clone, Serialize)]
pub struct PriceCatalog {
    entries: Vec<CatalogEntry>,
    extras: Vec<ExtraCatalogEntry>,
}

impl PriceCatalog {
    /// Build a catalog, checking that pairs and extra names are unique
    pub fn new(
        entries: Vec<CatalogEntry>,
        extras: Vec<ExtraCatalogEntry>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.section.trim().is_empty() || entry.size.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            if !seen.insert((entry.section.as_str(), entry.size.as_str())) {
                return Err(CatalogError::DuplicateEntry {
                    section: entry.section.clone(),
                    size: entry.size.clone(),
                });
            }
        }

        let mut seen_extras = HashSet::new();
        for extra in &extras {
            if extra.name.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            if !seen_extras.insert(extra.name.as_str()) {
                return Err(CatalogError::DuplicateExtra {
                    name: extra.name.clone(),
                });
            }
        }

        Ok(PriceCatalog { entries, extras })
    }

    /// The standard cleaning price table
    pub fn builtin() -> Self {
        let entry = |section: &str, size: &str, price: u64| CatalogEntry {
            section: section.to_string(),
            size: size.to_string(),
            unit_price: Money::new(price),
        };
        let extra = |name: &str, price: u64| ExtraCatalogEntry {
            name: name.to_string(),
            unit_price: Money::new(price),
        };

        PriceCatalog {
            entries: vec![
                entry("Bathroom", "Half", 50),
                entry("Bathroom", "Full", 95),
                entry("Bathroom", "Master", 120),
                entry("Bedroom", "Regular", 40),
                entry("Bedroom", "Large", 60),
                entry("Closet", "Standard", 30),
                entry("Dining Room", "Standard", 70),
                entry("Hallway", "Standard", 25),
                entry("Laundry Room", "Standard", 45),
                entry("Office", "Standard", 60),
                entry("Stairs", "Standard", 35),
                entry("Kitchen", "Regular", 70),
                entry("Kitchen", "Large", 100),
            ],
            extras: vec![
                extra("Oven", 40),
                extra("Fridge", 80),
                extra("Stove", 60),
                extra("Microwave", 20),
                extra("Range Hood", 50),
            ],
        }
    }

    /// Parse a catalog from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents).context("Failed to parse catalog")?;
        Ok(Self::new(file.entries, file.extras)?)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_toml(&contents)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
        log::info!(
            "Loaded catalog from {} ({} entries, {} extras)",
            path.display(),
            catalog.entries.len(),
            catalog.extras.len()
        );
        Ok(catalog)
    }

    /// Unit price for a (section, size) pair
    pub fn lookup_price(&self, section: &str, size: &str) -> Result<Money, QuoteError> {
        self.entries
            .iter()
            .find(|e| e.section == section && e.size == size)
            .map(|e| e.unit_price)
            .ok_or_else(|| QuoteError::NotFound {
                section: section.to_string(),
                size: size.to_string(),
            })
    }

    /// Unique sections in the order they first appear
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !sections.contains(&entry.section.as_str()) {
                sections.push(&entry.section);
            }
        }
        sections
    }

    /// Sizes offered for a section, in catalog order
    pub fn sizes_for(&self, section: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.section == section)
            .map(|e| e.size.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn extras_available(&self) -> &[ExtraCatalogEntry] {
        &self.extras
    }

    /// Unit price of a kitchen extra
    pub fn extra_price(&self, name: &str) -> Result<Money, QuoteError> {
        self.extras
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.unit_price)
            .ok_or_else(|| QuoteError::UnknownExtra {
                name: name.to_string(),
            })
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether a selection may carry kitchen extras
pub fn offers_extras(section: &str, size: &str) -> bool {
    section == KITCHEN_SECTION && EXTRA_SIZES.contains(&size)
}
