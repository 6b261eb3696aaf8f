//! Cart mutation and display commands.

use anyhow::{bail, Result};
use cart_cache::FileBackend;
use cart_core::price::format_price;
use cart_core::{CartStore, LineItem};
use dialoguer::Confirm;
use serde::Serialize;

use super::{AddArgs, ClearArgs, QuantityArgs, RemoveArgs};
use crate::context::Context;
use crate::terminal::TerminalView;

/// JSON shape of the cart.
#[derive(Serialize)]
struct CartJson<'a> {
    items: &'a [LineItem],
    count: u64,
    total: f64,
}

fn print_cart(store: &CartStore<FileBackend, TerminalView>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&CartJson {
            items: store.items(),
            count: store.item_count(),
            total: store.total(),
        });
    } else {
        store.view().present();
    }
}

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }
    let mut store = ctx.open_store()?;

    match (&args.name, &args.price) {
        (Some(name), Some(price)) => {
            let mut id = args.id.clone();
            for _ in 0..args.count {
                let stored = store.add_product(name, price, &args.image, id.as_deref())?;
                id = Some(stored.into_inner());
            }
        }
        _ => {
            let Some(id) = args.id.as_deref() else {
                bail!("Pass a catalog product id, or --name and --price");
            };
            let catalog = ctx.load_catalog()?;
            let Some(card) = catalog.find(id) else {
                bail!(
                    "Unknown product '{}'. Pass --name and --price to add it directly",
                    id
                );
            };
            let product = card.to_product()?;
            for _ in 0..args.count {
                store.add_item(product.clone())?;
            }
        }
    }

    print_cart(&store, ctx);
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if !store.remove_item(&args.id)? {
        ctx.output.debug(&format!("No item '{}' in the cart", args.id));
    }
    print_cart(&store, ctx);
    Ok(())
}

/// Run the qty command.
pub fn set_quantity(args: QuantityArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if !store.update_quantity(&args.id, args.quantity)? {
        ctx.output.warn(&format!("No item '{}' in the cart", args.id));
    }
    print_cart(&store, ctx);
    Ok(())
}

/// Run the show command.
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    print_cart(&store, ctx);
    Ok(())
}

/// Run the total command.
pub fn total(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "count": store.item_count(),
            "total": store.total(),
        }));
    } else {
        println!("{}", format_price(store.total(), ctx.currency_symbol()));
    }
    Ok(())
}

/// Run the clear command.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if store.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", store.item_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    store.clear()?;
    ctx.output.success("Cart cleared");
    Ok(())
}
