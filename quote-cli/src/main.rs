mod cli;
mod config;
mod quote;

use anyhow::Result;
use clap::Parser;

use cli::commands::{
    handle_build_command, handle_catalog_command, handle_config_command, handle_inspect_command,
    run_interactive,
};
use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Catalog(args) => {
            let catalog = config.resolve_catalog(cli.catalog.as_deref())?;
            handle_catalog_command(args, &catalog)
        }
        Commands::Build(args) => {
            let catalog = config.resolve_catalog(cli.catalog.as_deref())?;
            handle_build_command(args, &config, &catalog)
        }
        Commands::Interactive => {
            let catalog = config.resolve_catalog(cli.catalog.as_deref())?;
            run_interactive(&config, catalog)
        }
        Commands::Inspect { path } => handle_inspect_command(&path),
        Commands::Config { command } => handle_config_command(command, &config, cli.config.as_deref()),
    }
}
