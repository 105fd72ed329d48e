//! Catalog listing command

use anyhow::{Context, Result};

use crate::cli::render::render_catalog;
use crate::cli::{CatalogArgs, OutputFormat};
use crate::quote::PriceCatalog;

/// Handle the catalog command
pub fn handle_catalog_command(args: CatalogArgs, catalog: &PriceCatalog) -> Result<()> {
    println!("{}", format_catalog(catalog, args.format)?);
    Ok(())
}

fn format_catalog(catalog: &PriceCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_catalog(catalog)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(catalog).context("Failed to format JSON output")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output() {
        let json = format_catalog(&PriceCatalog::builtin(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["entries"].as_array().unwrap().len(), 13);
        assert_eq!(value["entries"][1]["section"], "Bathroom");
        assert_eq!(value["entries"][1]["price"], 95);
        assert_eq!(value["extras"][0]["name"], "Oven");
    }
}
