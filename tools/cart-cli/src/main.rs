//! Cart CLI - Command line storefront cart.
//!
//! Commands:
//! - `cart add` - Add a product to the cart
//! - `cart remove` - Remove an item
//! - `cart qty` - Set an item's quantity
//! - `cart show` - Show the cart
//! - `cart total` - Print the cart total
//! - `cart clear` - Empty the cart
//! - `cart checkout` - Summarize and empty the cart
//! - `cart products` - Browse the catalog
//! - `cart render` - Render the cart widget as HTML
//! - `cart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use cart_observability::{init_logging, LogFormat, LogLevel};
use clap::{Parser, Subcommand};

use commands::{
    AddArgs, ClearArgs, ConfigArgs, ProductsArgs, QuantityArgs, RemoveArgs, RenderArgs,
};

/// Cart CLI - Keep a storefront shopping cart from the terminal
#[derive(Parser)]
#[command(name = "cart")]
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
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add(AddArgs),

    /// Remove an item from the cart
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Set the quantity of an item
    Qty(QuantityArgs),

    /// Show the cart
    Show,

    /// Print the cart total
    Total,

    /// Empty the cart
    Clear(ClearArgs),

    /// Summarize the cart and empty it
    Checkout,

    /// Browse the product catalog
    Products(ProductsArgs),

    /// Render the cart widget as HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    init_logging(level, format)?;

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Qty(args) => commands::cart::set_quantity(args, &ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Total => commands::cart::total(&ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Checkout => commands::checkout::run(&ctx),
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
