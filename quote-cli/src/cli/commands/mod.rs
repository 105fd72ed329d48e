//! Command handlers

pub mod build;
pub mod catalog;
pub mod config;
pub mod inspect;
pub mod interactive;

pub use build::handle_build_command;
pub use catalog::handle_catalog_command;
pub use config::handle_config_command;
pub use inspect::handle_inspect_command;
pub use interactive::run_interactive;
