//! Print an exported quote

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::cli::render::render_cart;
use crate::quote::excel::read_quote_file;
use crate::quote::{Cart, ClientField};

/// Handle the inspect command
pub fn handle_inspect_command(path: &Path) -> Result<()> {
    let quote = read_quote_file(path)?;

    println!("{}", "Client Information".bold());
    for field in ClientField::all() {
        println!("  {}: {}", field.prompt(), quote.client.get(*field));
    }
    println!();

    let mut cart = Cart::new();
    cart.add_lines(quote.lines)?;
    print!("{}", render_cart(&cart));

    if cart.grand_total() != quote.total {
        log::warn!(
            "Stored total {} differs from the sum of lines {}",
            quote.total,
            cart.grand_total()
        );
        println!(
            "{}",
            format!("Stored total in file: {}", quote.total).yellow()
        );
    }
    Ok(())
}
