//! Command-line interface definitions

pub mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "cleaning-quote",
    version,
    about = "Build cleaning service quotes and export them to Excel"
)]
pub struct Cli {
    /// Config file (defaults to ~/.config/cleaning-quote/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Price catalog file replacing the built-in prices
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show sections, sizes, prices and kitchen extras
    Catalog(CatalogArgs),
    /// Build a quote from item specs and export it
    Build(BuildArgs),
    /// Build a quote step by step with prompts (default)
    Interactive,
    /// Print a previously exported quote
    Inspect {
        /// Exported .xlsx file
        path: PathBuf,
    },
    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Line to quote: "Section:Size[:Qty][+Extra[=Qty]]...", e.g. "Kitchen:Large:1+Oven=2"
    #[arg(long = "item", short = 'i', required = true)]
    pub items: Vec<String>,

    #[command(flatten)]
    pub client: ClientArgs,

    /// Output file (defaults to the configured export path)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,

    /// Print the quote without writing a file
    #[arg(long)]
    pub dry: bool,
}

#[derive(Args, Default)]
pub struct ClientArgs {
    /// Client or company name
    #[arg(long, default_value = "")]
    pub client_name: String,
    /// Street address
    #[arg(long, default_value = "")]
    pub address: String,
    /// Apartment, suite, etc.
    #[arg(long, default_value = "")]
    pub address2: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub state: String,
    #[arg(long, default_value = "")]
    pub zip: String,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
