//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product id. Looked up in the catalog unless --name is given.
    pub id: Option<String>,

    /// Product name, to add a product that is not in the catalog.
    #[arg(long, requires = "price")]
    pub name: Option<String>,

    /// Product price (e.g. "1,250.00").
    #[arg(long, requires = "name")]
    pub price: Option<String>,

    /// Product image URL.
    #[arg(long, default_value = "")]
    pub image: String,

    /// Number of units to add.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QuantityArgs {
    /// Product id.
    pub id: String,

    /// New quantity; zero or less removes the item.
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category ("all" for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Price window as "min-max" (e.g. "100-500", "1000-").
    #[arg(short, long)]
    pub price: Option<String>,

    /// Sort order: price-low, price-high or name.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Case-insensitive text to find in titles and descriptions.
    #[arg(long, conflicts_with_all = ["category", "price"])]
    pub search: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Write the HTML fragment here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render the cart panel opened.
    #[arg(long)]
    pub open: bool,
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
    /// Write a starter cart.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
