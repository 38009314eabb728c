//! Shop CLI - terminal client for the online store.
//!
//! Commands:
//! - `shop catalog` - List products, optionally by category
//! - `shop categories` - List category labels
//! - `shop page` - Print a page of the store
//! - `shop browse` - Interactive shopping session
//! - `shop config` - Manage configuration

mod commands;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, PageArgs};

/// Shop CLI - Browse the online store from a terminal
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// List product categories
    Categories,

    /// Print a store page (home, catalog, checkout, delivery, contacts)
    Page(PageArgs),

    /// Start an interactive shopping session
    Browse,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Page(args) => commands::page::run(args, &ctx),
        Commands::Browse => commands::browse::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
