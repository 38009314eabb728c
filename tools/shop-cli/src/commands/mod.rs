//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod categories;
pub mod config;
pub mod page;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show only products in this category ("Все" for all).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the page command.
#[derive(Args)]
pub struct PageArgs {
    /// Page slug: home, catalog, checkout, delivery or contacts.
    pub slug: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a store.toml into the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
