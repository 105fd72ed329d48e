//! Interactive quoting loop
//!
//! Each menu choice becomes one or more [`Action`]s applied to the session,
//! after which the cart is re-rendered.

use std::path::Path;

use anyhow::Result;
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use is_terminal::IsTerminal;

use crate::cli::render::render_cart;
use crate::config::Config;
use crate::quote::excel::save_quote;
use crate::quote::{Action, ClientField, Outcome, PriceCatalog, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    ClientInfo,
    AddToQuote,
    DeleteLine,
    Reset,
    Download,
    Quit,
}

impl MenuItem {
    fn label(&self) -> &'static str {
        match self {
            MenuItem::ClientInfo => "Edit client information",
            MenuItem::AddToQuote => "Add to quote",
            MenuItem::DeleteLine => "Delete a line",
            MenuItem::Reset => "Reset quote",
            MenuItem::Download => "Download quote",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Delete and download only make sense with something in the cart
fn menu_items(session: &Session) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::ClientInfo, MenuItem::AddToQuote];
    if !session.cart().is_empty() {
        items.extend([MenuItem::DeleteLine, MenuItem::Reset, MenuItem::Download]);
    }
    items.push(MenuItem::Quit);
    items
}

/// Extras prompt only when the selection offers extras and the catalog has some
fn offers_extra_prompt(session: &Session) -> bool {
    session.extras_offered() && !session.extra_choices().is_empty()
}

/// Run the prompt loop until the user quits
pub fn run_interactive(config: &Config, catalog: PriceCatalog) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("Interactive mode needs a terminal; use 'cleaning-quote build' instead");
    }

    let theme = ColorfulTheme::default();
    let mut session = Session::new(catalog);

    println!("{}", "Cleaning Quote Calculator".bold().cyan());

    loop {
        println!();
        print_cart(&session);

        let items = menu_items(&session);
        let labels: Vec<&str> = items.iter().map(|i| i.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match items[choice] {
            MenuItem::ClientInfo => edit_client(&theme, &mut session)?,
            MenuItem::AddToQuote => add_to_quote(&theme, &mut session)?,
            MenuItem::DeleteLine => delete_line(&theme, &mut session)?,
            MenuItem::Reset => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Clear every line from the quote?")
                    .default(false)
                    .interact()?
                {
                    session.apply(Action::Reset)?;
                }
            }
            MenuItem::Download => download(&theme, &session, config)?,
            MenuItem::Quit => {
                if session.cart().is_empty()
                    || Confirm::with_theme(&theme)
                        .with_prompt("Quit and discard the current quote?")
                        .default(false)
                        .interact()?
                {
                    return Ok(());
                }
            }
        }
    }
}

fn print_cart(session: &Session) {
    if session.cart().is_empty() {
        println!("{}", "Quote is empty".dimmed());
        return;
    }
    println!("{}", "Current Quote".bold());
    let rendered = render_cart(session.cart());
    for line in rendered.lines() {
        if line.starts_with("Total:") {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{}", line);
        }
    }
}

fn edit_client(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    for field in ClientField::all() {
        let value: String = Input::with_theme(theme)
            .with_prompt(field.prompt())
            .with_initial_text(session.client().get(*field))
            .allow_empty(true)
            .interact_text()?;
        session.apply(Action::SetClient(*field, value))?;
    }
    Ok(())
}

fn add_to_quote(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    let sections: Vec<String> = session
        .catalog()
        .sections()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let current = session.selection();
    let section_idx = Select::with_theme(theme)
        .with_prompt("Choose a section")
        .items(&sections)
        .default(sections.iter().position(|s| *s == current.section).unwrap_or(0))
        .interact()?;
    session.apply(Action::SelectSection(sections[section_idx].clone()))?;

    let sizes: Vec<String> = session
        .catalog()
        .sizes_for(&sections[section_idx])
        .iter()
        .map(|s| s.to_string())
        .collect();
    let size_idx = Select::with_theme(theme)
        .with_prompt("Choose a size")
        .items(&sizes)
        .default(0)
        .interact()?;
    session.apply(Action::SelectSize(sizes[size_idx].clone()))?;

    let quantity = prompt_quantity(theme, "Quantity")?;
    session.apply(Action::SetQuantity(quantity))?;

    if offers_extra_prompt(session) {
        choose_extras(theme, session)?;
    }

    println!(
        "{} {}",
        "Line total:".dimmed(),
        session.pending_total()?.to_string().cyan()
    );

    if let Outcome::Added(count) = session.apply(Action::AddToQuote)? {
        println!("{}", format!("Added {} line(s)", count).green());
    }
    Ok(())
}

fn choose_extras(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    let choices = session.extra_choices().to_vec();
    let labels: Vec<String> = choices
        .iter()
        .map(|c| format!("Add {} ({})", c.name, c.unit_price))
        .collect();
    let defaults: Vec<bool> = choices.iter().map(|c| c.selected).collect();

    let picked = MultiSelect::with_theme(theme)
        .with_prompt("Kitchen Extras (space to toggle)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    for (idx, choice) in choices.iter().enumerate() {
        let selected = picked.contains(&idx);
        session.apply(Action::ToggleExtra(choice.name.clone(), selected))?;
        if selected {
            let quantity = prompt_quantity(theme, &format!("Quantity for {}", choice.name))?;
            session.apply(Action::SetExtraQuantity(choice.name.clone(), quantity))?;
        }
    }
    Ok(())
}

fn prompt_quantity(theme: &ColorfulTheme, prompt: &str) -> Result<u32> {
    let quantity: u32 = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(1)
        .validate_with(|n: &u32| -> Result<(), &str> {
            if *n >= 1 {
                Ok(())
            } else {
                Err("Quantity must be at least 1")
            }
        })
        .interact_text()?;
    Ok(quantity)
}

fn delete_line(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    let mut labels: Vec<String> = session
        .cart()
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let size = if item.is_extra() {
                String::new()
            } else {
                format!(" {}", item.size())
            };
            format!("{}. {}{} x{} = {}", i + 1, item.section(), size, item.quantity(), item.total())
        })
        .collect();
    labels.push("Cancel".to_string());

    let idx = Select::with_theme(theme)
        .with_prompt("Delete which line?")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    if idx < session.cart().len() {
        if let Outcome::Removed(item) = session.apply(Action::DeleteLine(idx))? {
            println!("{}", format!("Removed {}", item.section()).yellow());
        }
    }
    Ok(())
}

fn download(theme: &ColorfulTheme, session: &Session, config: &Config) -> Result<()> {
    let Some(bytes) = session.download()? else {
        println!("{}", "Nothing to download yet".yellow());
        return Ok(());
    };

    let default_path = config.resolve_export_path(None);
    let path: String = Input::with_theme(theme)
        .with_prompt("Save quote as")
        .default(default_path.display().to_string())
        .interact_text()?;
    let path = Path::new(&path);

    if path.exists()
        && !Confirm::with_theme(theme)
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(false)
            .interact()?
    {
        return Ok(());
    }

    save_quote(path, &bytes)?;
    println!("Quote saved to: {}", path.display().to_string().bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::catalog::CatalogEntry;
    use crate::quote::Money;

    #[test]
    fn test_menu_depends_on_cart() {
        let mut session = Session::new(PriceCatalog::builtin());
        assert_eq!(
            menu_items(&session),
            vec![MenuItem::ClientInfo, MenuItem::AddToQuote, MenuItem::Quit]
        );

        session.apply(Action::AddToQuote).unwrap();
        let items = menu_items(&session);
        assert!(items.contains(&MenuItem::Download));
        assert!(items.contains(&MenuItem::DeleteLine));
        assert_eq!(items.last(), Some(&MenuItem::Quit));
    }

    #[test]
    fn test_extra_prompt_needs_catalog_extras() {
        let mut session = Session::new(PriceCatalog::builtin());
        session.apply(Action::SelectSection("Kitchen".to_string())).unwrap();
        assert!(offers_extra_prompt(&session));

        session.apply(Action::SelectSection("Office".to_string())).unwrap();
        assert!(!offers_extra_prompt(&session));

        let catalog = PriceCatalog::new(
            vec![CatalogEntry {
                section: "Kitchen".to_string(),
                size: "Large".to_string(),
                unit_price: Money::new(100),
            }],
            vec![],
        )
        .unwrap();
        let session = Session::new(catalog);
        assert!(session.extras_offered());
        assert!(!offers_extra_prompt(&session));
    }
}
