//! Non-interactive quote building from item specs

use anyhow::{Context, Result};
use colored::*;

use crate::cli::render::render_cart;
use crate::cli::{BuildArgs, ClientArgs};
use crate::config::Config;
use crate::quote::excel::{export_quote, save_quote};
use crate::quote::{Cart, ClientInfo, ExtraSelection, PriceCatalog, QuoteBuilder, Selection};

/// One parsed `--item` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub selection: Selection,
    pub extras: Vec<ExtraSelection>,
}

/// Parse `Section:Size[:Qty][+Extra[=Qty]]...`
pub fn parse_item_spec(spec: &str) -> Result<ItemSpec> {
    let mut parts = spec.split('+');
    let base = parts.next().unwrap_or_default().trim();

    let fields: Vec<&str> = base.split(':').map(str::trim).collect();
    let (section, size, quantity) = match fields.as_slice() {
        [section, size] => (*section, *size, 1),
        [section, size, qty] => (*section, *size, parse_quantity(qty, spec)?),
        _ => anyhow::bail!(
            "Invalid item '{}': expected Section:Size[:Qty], e.g. \"Bathroom:Full:2\"",
            spec
        ),
    };
    if section.is_empty() || size.is_empty() {
        anyhow::bail!("Invalid item '{}': section and size are required", spec);
    }

    let mut extras = Vec::new();
    for extra in parts {
        let (name, qty) = match extra.split_once('=') {
            Some((name, qty)) => (name.trim(), parse_quantity(qty.trim(), spec)?),
            None => (extra.trim(), 1),
        };
        if name.is_empty() {
            anyhow::bail!("Invalid item '{}': empty extra name", spec);
        }
        extras.push(ExtraSelection::new(name, qty));
    }

    Ok(ItemSpec {
        selection: Selection::new(section, size, quantity),
        extras,
    })
}

fn parse_quantity(text: &str, spec: &str) -> Result<u32> {
    let quantity: u32 = text
        .parse()
        .with_context(|| format!("Invalid quantity '{}' in item '{}'", text, spec))?;
    if quantity < 1 {
        anyhow::bail!("Quantity must be at least 1 in item '{}'", spec);
    }
    Ok(quantity)
}

/// Price every spec into a fresh cart; fails on the first bad spec
pub fn build_cart(catalog: &PriceCatalog, specs: &[ItemSpec]) -> Result<Cart> {
    let builder = QuoteBuilder::new(catalog);
    let mut cart = Cart::new();
    for spec in specs {
        let quote = builder
            .build(&spec.selection, &spec.extras)
            .with_context(|| {
                format!(
                    "Failed to price {} / {}",
                    spec.selection.section, spec.selection.size
                )
            })?;
        cart.add_lines(quote.into_lines())?;
    }
    Ok(cart)
}

impl From<ClientArgs> for ClientInfo {
    fn from(args: ClientArgs) -> Self {
        ClientInfo {
            name: args.client_name,
            address_line1: args.address,
            address_line2: args.address2,
            city: args.city,
            state: args.state,
            zip: args.zip,
        }
    }
}

/// Handle the build command
pub fn handle_build_command(args: BuildArgs, config: &Config, catalog: &PriceCatalog) -> Result<()> {
    let specs = args
        .items
        .iter()
        .map(|s| parse_item_spec(s))
        .collect::<Result<Vec<_>>>()?;

    let cart = build_cart(catalog, &specs)?;
    let client = ClientInfo::from(args.client);

    print!("{}", render_cart(&cart));

    if args.dry {
        return Ok(());
    }

    let path = config.resolve_export_path(args.out.as_deref());
    if path.exists() && !args.force {
        anyhow::bail!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let bytes = export_quote(&client, cart.items(), cart.grand_total())?;
    save_quote(&path, &bytes)?;

    println!();
    println!("Quote saved to: {}", path.display().to_string().bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::Money;
    use crate::quote::excel::read_quote_file;
    use std::path::PathBuf;

    #[test]
    fn test_parse_simple() {
        let spec = parse_item_spec("Bathroom:Full:2").unwrap();
        assert_eq!(spec.selection, Selection::new("Bathroom", "Full", 2));
        assert!(spec.extras.is_empty());
    }

    #[test]
    fn test_parse_default_quantity_and_spaces() {
        let spec = parse_item_spec(" Dining Room : Standard ").unwrap();
        assert_eq!(spec.selection, Selection::new("Dining Room", "Standard", 1));
    }

    #[test]
    fn test_parse_extras() {
        let spec = parse_item_spec("Kitchen:Large:1+Oven=2+Range Hood").unwrap();
        assert_eq!(
            spec.extras,
            vec![ExtraSelection::new("Oven", 2), ExtraSelection::new("Range Hood", 1)]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_item_spec("Bathroom").is_err());
        assert!(parse_item_spec("Bathroom:Full:0").is_err());
        assert!(parse_item_spec("Bathroom:Full:two").is_err());
        assert!(parse_item_spec("Kitchen:Large+=2").is_err());
        assert!(parse_item_spec(":Full").is_err());
        assert!(parse_item_spec("a:b:1:2").is_err());
    }

    #[test]
    fn test_build_cart_totals() {
        let catalog = PriceCatalog::builtin();
        let specs = vec![
            parse_item_spec("Bathroom:Full:2").unwrap(),
            parse_item_spec("Kitchen:Large:1+Oven=2").unwrap(),
        ];

        let cart = build_cart(&catalog, &specs).unwrap();

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.grand_total(), Money::new(370));
    }

    #[test]
    fn test_build_cart_rejects_extras_outside_kitchen() {
        let catalog = PriceCatalog::builtin();
        let specs = vec![parse_item_spec("Bedroom:Large+Oven").unwrap()];
        assert!(build_cart(&catalog, &specs).is_err());
    }

    fn build_args(out: PathBuf, force: bool) -> BuildArgs {
        BuildArgs {
            items: vec!["Hallway:Standard:2".to_string()],
            client: ClientArgs {
                client_name: "Jane Doe".to_string(),
                ..Default::default()
            },
            out: Some(out),
            force,
            dry: false,
        }
    }

    #[test]
    fn test_handle_build_writes_file() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("quote.xlsx");

        handle_build_command(build_args(out.clone(), false), &Config::default(), &PriceCatalog::builtin())
            .unwrap();

        let quote = read_quote_file(&out).unwrap();
        assert_eq!(quote.client.name, "Jane Doe");
        assert_eq!(quote.total, Money::new(50));
    }

    #[test]
    fn test_handle_build_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("quote.xlsx");
        std::fs::write(&out, b"existing").unwrap();

        let result =
            handle_build_command(build_args(out.clone(), false), &Config::default(), &PriceCatalog::builtin());

        assert!(result.is_err());
        assert_eq!(std::fs::read(&out).unwrap(), b"existing");

        handle_build_command(build_args(out.clone(), true), &Config::default(), &PriceCatalog::builtin())
            .unwrap();
        assert!(read_quote_file(&out).is_ok());
    }
}
